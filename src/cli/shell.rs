//! Interactive front end walking the wizard steps.
//!
//! The shell only renders state and relays input; every decision lives in
//! the controller. Loading feedback is a printed line since gateway calls
//! block until they settle.

use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};

use crate::cli::output::Formatter;
use crate::core::{AddressOutcome, LookupOutcome, WizardController, WizardStep};
use crate::domain::common::Displayable;
use crate::domain::{ManualField, TicketField};

pub fn run_cli(mut wizard: WizardController) -> dialoguer::Result<()> {
    let formatter = Formatter::new();
    formatter.print_header("Passe Fácil: transit ticket requisition");

    loop {
        let keep_going = match wizard.step() {
            WizardStep::Search => search_step(&mut wizard, &formatter)?,
            WizardStep::Select => select_step(&mut wizard, &formatter)?,
            WizardStep::Display => display_step(&mut wizard, &formatter)?,
            WizardStep::Manual => manual_step(&mut wizard, &formatter)?,
            WizardStep::Success => success_step(&mut wizard, &formatter)?,
        };
        if !keep_going {
            break;
        }
    }
    Ok(())
}

fn search_step(wizard: &mut WizardController, formatter: &Formatter) -> dialoguer::Result<bool> {
    formatter.print_header("Find the student");
    formatter.print_detail("Enter the financial guardian's CPF (leave empty to quit).");
    let input: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("CPF")
        .allow_empty(true)
        .interact_text()?;
    if input.trim().is_empty() {
        return Ok(false);
    }

    formatter.print_detail("Searching...");
    match wizard.submit_lookup_query(&input) {
        Ok(LookupOutcome::Bound(name)) => {
            formatter.print_success(format!("Record for {name} loaded."));
        }
        Ok(LookupOutcome::Ambiguous(count)) => {
            formatter.print_detail(format!(
                "{count} students share this CPF. Pick the one you mean."
            ));
        }
        Ok(LookupOutcome::NoMatch) => {
            formatter.print_warning("No student found. Fill the request manually.");
        }
        Err(err) => formatter.print_error(err),
    }
    Ok(true)
}

fn select_step(wizard: &mut WizardController, formatter: &Formatter) -> dialoguer::Result<bool> {
    let mut items: Vec<String> = wizard
        .candidates()
        .iter()
        .map(|record| record.display_label())
        .collect();
    items.push("New search".to_string());

    let choice = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Matching students")
        .items(&items)
        .default(0)
        .interact()?;
    if choice == items.len() - 1 {
        wizard.reset();
    } else if let Err(err) = wizard.choose_candidate(choice) {
        formatter.print_error(err);
    }
    Ok(true)
}

fn display_step(wizard: &mut WizardController, formatter: &Formatter) -> dialoguer::Result<bool> {
    formatter.print_header("Student record");
    if let Some(record) = wizard.bound_record() {
        formatter.print_two_column(&[
            ("Name", record.name.clone()),
            ("Code", record.student_code.to_string()),
            ("Course", record.course.clone()),
            ("Guardian CPF", wizard.guardian_tax_id().to_string()),
            ("Phone", record.contact_phone.clone()),
            ("Email", record.contact_email.clone()),
        ]);
    }

    let actions = [
        "Fill a field",
        "Resolve postal code",
        "Review and submit",
        "New search",
    ];
    let choice = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Next action")
        .items(&actions)
        .default(0)
        .interact()?;
    match choice {
        0 => fill_ticket_field(wizard, formatter)?,
        1 => resolve_postal_code(wizard, formatter)?,
        2 => submit(wizard, formatter)?,
        _ => wizard.reset(),
    }
    Ok(true)
}

/// Ticket fields the user types in, in prompt order.
const EDITABLE_TICKET_FIELDS: [TicketField; 14] = [
    TicketField::Shift,
    TicketField::RegistrationNumber,
    TicketField::DocumentNumber,
    TicketField::DocumentIssueDate,
    TicketField::StudentTaxId,
    TicketField::LandlinePhone,
    TicketField::GuardianName,
    TicketField::PostalCode,
    TicketField::Street,
    TicketField::HouseNumber,
    TicketField::Complement,
    TicketField::District,
    TicketField::City,
    TicketField::Region,
];

fn fill_ticket_field(
    wizard: &mut WizardController,
    formatter: &Formatter,
) -> dialoguer::Result<()> {
    let labels: Vec<String> = EDITABLE_TICKET_FIELDS
        .iter()
        .map(|field| {
            let current = wizard.ticket_draft().value(*field);
            if current.is_empty() {
                field.label().to_string()
            } else {
                format!("{} [{}]", field.label(), current)
            }
        })
        .collect();
    let choice = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Field")
        .items(&labels)
        .default(0)
        .interact()?;
    let field = EDITABLE_TICKET_FIELDS[choice];

    let value = if field == TicketField::Shift {
        let shifts = ["morning", "afternoon"];
        let picked = Select::with_theme(&ColorfulTheme::default())
            .with_prompt("Shift")
            .items(&shifts)
            .default(0)
            .interact()?;
        shifts[picked].to_string()
    } else {
        Input::with_theme(&ColorfulTheme::default())
            .with_prompt(field.label())
            .allow_empty(true)
            .interact_text()?
    };

    match wizard.update_ticket_field(field, &value) {
        Ok(()) => formatter.print_detail(format!(
            "{}: {}",
            field.label(),
            wizard.ticket_draft().value(field)
        )),
        Err(err) => formatter.print_error(err),
    }
    Ok(())
}

fn resolve_postal_code(
    wizard: &mut WizardController,
    formatter: &Formatter,
) -> dialoguer::Result<()> {
    let code: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("Postal code (CEP)")
        .with_initial_text(wizard.ticket_draft().postal_code.clone())
        .interact_text()?;

    formatter.print_detail("Resolving...");
    match wizard.resolve_postal_code(&code) {
        Ok(AddressOutcome::Filled) => {
            let draft = wizard.ticket_draft();
            formatter.print_success("Address filled from the postal directory.");
            formatter.print_two_column(&[
                ("Street", draft.street.clone()),
                ("District", draft.district.clone()),
                ("City", draft.city.clone()),
                ("Region", draft.region.clone()),
            ]);
        }
        Ok(AddressOutcome::NotFound) => {
            formatter.print_warning("Postal code not found; fill the address by hand.");
        }
        Err(err) => formatter.print_error(err),
    }
    Ok(())
}

fn manual_step(wizard: &mut WizardController, formatter: &Formatter) -> dialoguer::Result<bool> {
    formatter.print_header("Manual request");
    formatter.print_detail(format!(
        "No record matched CPF {}. Fill every field below.",
        wizard.manual_draft().guardian_tax_id
    ));

    let actions = ["Fill a field", "Review and submit", "New search"];
    let choice = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Next action")
        .items(&actions)
        .default(0)
        .interact()?;
    match choice {
        0 => fill_manual_field(wizard, formatter)?,
        1 => submit(wizard, formatter)?,
        _ => wizard.reset(),
    }
    Ok(true)
}

/// Manual fields the user types in; the guardian CPF is pre-filled.
const EDITABLE_MANUAL_FIELDS: [ManualField; 8] = [
    ManualField::StudentName,
    ManualField::GuardianName,
    ManualField::Address,
    ManualField::Phone,
    ManualField::Email,
    ManualField::School,
    ManualField::Grade,
    ManualField::Shift,
];

fn fill_manual_field(
    wizard: &mut WizardController,
    formatter: &Formatter,
) -> dialoguer::Result<()> {
    let labels: Vec<String> = EDITABLE_MANUAL_FIELDS
        .iter()
        .map(|field| {
            let current = wizard.manual_draft().value(*field);
            if current.is_empty() {
                field.label().to_string()
            } else {
                format!("{} [{}]", field.label(), current)
            }
        })
        .collect();
    let choice = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Field")
        .items(&labels)
        .default(0)
        .interact()?;
    let field = EDITABLE_MANUAL_FIELDS[choice];

    let value = if field == ManualField::Shift {
        let shifts = ["morning", "afternoon"];
        let picked = Select::with_theme(&ColorfulTheme::default())
            .with_prompt("Shift")
            .items(&shifts)
            .default(0)
            .interact()?;
        shifts[picked].to_string()
    } else {
        Input::with_theme(&ColorfulTheme::default())
            .with_prompt(field.label())
            .allow_empty(true)
            .interact_text()?
    };

    match wizard.update_manual_field(field, &value) {
        Ok(()) => formatter.print_detail(format!(
            "{}: {}",
            field.label(),
            wizard.manual_draft().value(field)
        )),
        Err(err) => formatter.print_error(err),
    }
    Ok(())
}

fn submit(wizard: &mut WizardController, formatter: &Formatter) -> dialoguer::Result<()> {
    formatter.print_detail("Sending...");
    match wizard.submit() {
        Ok(()) => {}
        Err(err) => formatter.print_error(err),
    }
    Ok(())
}

fn success_step(wizard: &mut WizardController, formatter: &Formatter) -> dialoguer::Result<bool> {
    formatter.print_header("Request sent");
    formatter.print_success("Your transit ticket request was submitted. Expect a reply soon.");
    let again = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt("Start a new request?")
        .default(false)
        .interact()?;
    if again {
        wizard.reset();
        Ok(true)
    } else {
        Ok(false)
    }
}
