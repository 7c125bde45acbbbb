use clap::Parser;
use sports_registration::domain::ports::ConfigProvider;
use sports_registration::utils::{logger, validation::Validate};
use sports_registration::{
    Cli, Command, JsonFileStore, Registration, RegistrationService, DEPARTMENTS, SPORTS,
};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // 載入配置
    let config = match cli.resolve_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };

    // 初始化日誌
    logger::init_cli_logger(config.verbose());

    tracing::info!("Starting sports-registration CLI");
    if config.verbose() {
        tracing::debug!("CLI config: {:?}", cli);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    // 建立儲存與服務
    let store = JsonFileStore::new(config.data_file());
    let service = RegistrationService::new(store);

    match &cli.command {
        Command::Register {
            first_name,
            last_name,
            sport,
            department,
            enrollment_no,
        } => {
            match service.register_student(first_name, last_name, sport, department, enrollment_no)
            {
                Ok(record) => {
                    println!("✅ Registration successful!");
                    print_registration(&record);
                }
                Err(e) => {
                    eprintln!("❌ {}", e);
                    std::process::exit(1);
                }
            }
        }
        Command::List => {
            print_registrations("All Registrations", &service.get_all_registrations());
        }
        Command::Search { sport, department } => {
            if let Some(sport) = sport {
                print_registrations(
                    &format!("Sport: {}", sport),
                    &service.get_registrations_by_sport(sport),
                );
            } else if let Some(department) = department {
                print_registrations(
                    &format!("Department: {}", department),
                    &service.get_registrations_by_department(department),
                );
            } else {
                print_registrations("All Registrations", &service.get_all_registrations());
            }
        }
        Command::Catalog => {
            println!("Sports:");
            for sport in SPORTS {
                println!("  - {}", sport);
            }
            println!("Departments:");
            for department in DEPARTMENTS {
                println!("  - {}", department);
            }
        }
    }

    Ok(())
}

fn print_registration(record: &Registration) {
    println!(
        "  #{} {} {} | {} | {} | enrollment {} | registered {}",
        record.id,
        record.first_name,
        record.last_name,
        record.sport,
        record.department,
        record.enrollment_number,
        record.registered_at
    );
}

fn print_registrations(heading: &str, records: &[Registration]) {
    println!("{} ({})", heading, records.len());
    if records.is_empty() {
        println!("  No registrations found");
        return;
    }
    for record in records {
        print_registration(record);
    }
}
