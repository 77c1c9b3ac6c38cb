use passe_core::cli::run_cli;
use passe_core::config::GatewayConfig;
use passe_core::core::{Gateways, WizardController};
use passe_core::gateway::http::{RestStudentDirectory, ViaCepAddressDirectory, WebhookIntake};

fn main() {
    passe_core::init();

    let config = GatewayConfig::from_env();
    let gateways = Gateways {
        students: Box::new(RestStudentDirectory::new(&config)),
        addresses: Box::new(ViaCepAddressDirectory::new(&config)),
        intake: Box::new(WebhookIntake::new(&config)),
    };

    if let Err(err) = run_cli(WizardController::new(gateways)) {
        eprintln!("passe_core_cli: {err}");
        std::process::exit(1);
    }
}
