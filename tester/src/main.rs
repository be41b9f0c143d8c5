use std::sync::Arc;

use clap::Parser;
use tokio::sync::Mutex;

use form::models::Field;
use form::sheets::{build_row, timestamp_now, SheetsGateway, SHEETS_URL};
use form::state::{submit, ContactForm};

/// Fills a sample application through the keystroke path and submits it.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Webhook to post against, defaults to the club sheet
    #[arg(long, default_value = SHEETS_URL)]
    url: String,

    /// Print the sheet row instead of sending it
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    let mut form = ContactForm::new();
    // raw keystrokes on purpose, normalization should clean these up
    form.on_field_change(Field::FirstName, "Amine");
    form.on_field_change(Field::LastName, "Benali");
    form.on_field_change(Field::Age, "21");
    form.on_field_change(Field::Cni, "ab12-34");
    form.on_field_change(Field::Email, "amine@example.com");
    form.on_field_change(Field::Phone, "06 12 34 56 78");
    form.on_field_change(Field::University, "FSR");
    form.on_field_change(Field::Year, "junior");
    form.on_field_change(Field::Instrument, "Guitar");
    form.on_field_change(Field::Subject, "instrument");
    form.on_field_change(
        Field::Message,
        "Test submission from the tester binary, please ignore.",
    );

    println!("CNI stored as: {}", form.record().cni);
    println!("Phone stored as: {}", form.record().phone);

    if args.dry_run {
        let row = build_row(form.record(), timestamp_now());
        println!("{}", serde_json::to_string_pretty(&row).unwrap());
        return;
    }

    let form = Arc::new(Mutex::new(form));
    let gateway = SheetsGateway::new(args.url);

    let sent = submit(&form, &gateway).await;
    println!("Sent: {sent}");

    let form = form.lock().await;
    for (field, message) in form.errors() {
        println!("{field:?}: {message}");
    }
}
