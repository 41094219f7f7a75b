use std::io::{self, Write};

use cardfile_core::{avatar_color, filter_by_name, initials};
use cardfile_db::{Contact, ContactDb, NewContact, StoreError};
use color_eyre::eyre::{Context, Result};

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::builder()
                .from_env_lossy()
                .add_directive("cardfile_cli=info".parse().unwrap())
                .add_directive("cardfile_db=info".parse().unwrap()),
        )
        .init();

    let db = ContactDb::new()
        .await
        .wrap_err("Failed to open the contact database")?;

    loop {
        print_menu();
        let choice = read_line("Choice: ")?;

        match choice.trim() {
            "1" => list_contacts(&db).await?,
            "2" => search_contacts(&db).await?,
            "3" => list_favorites(&db).await?,
            "4" => add_contact(&db).await?,
            "5" => update_contact(&db).await?,
            "6" => toggle_favorite(&db).await?,
            "7" => delete_contact(&db).await?,
            "0" => {
                println!("👋 Bye!");
                db.close().await;
                break;
            }
            _ => println!("❌ Invalid choice"),
        }
    }

    Ok(())
}

fn print_menu() {
    println!();
    println!("╔════════════════════════════════════╗");
    println!("║        CARDFILE - Contacts         ║");
    println!("╠════════════════════════════════════╣");
    println!("║  1. List Contacts                  ║");
    println!("║  2. Search Contacts                ║");
    println!("║  3. List Favorites                 ║");
    println!("║  4. Add Contact                    ║");
    println!("║  5. Update Contact                 ║");
    println!("║  6. Toggle Favorite                ║");
    println!("║  7. Delete Contact                 ║");
    println!("║  0. Exit                           ║");
    println!("╚════════════════════════════════════╝");
}

fn print_contact(contact: &Contact) {
    let avatar = match &contact.photo {
        Some(photo) => format!("🖼 {}", photo),
        None => format!("{} {}", initials(&contact.name), avatar_color(contact)),
    };
    let heart = if contact.is_favorite { "❤️" } else { "  " };
    let landline = contact
        .landline_number
        .as_deref()
        .map(|n| format!(", landline {}", n))
        .unwrap_or_default();

    println!(
        "  {} #{} {} - 📱 {}{} [{}]",
        heart, contact.id, contact.name, contact.mobile_number, landline, avatar
    );
}

fn print_contact_list(contacts: &[&Contact]) {
    if contacts.is_empty() {
        println!("📭 No contacts found");
    } else {
        println!("\n📇 Contacts ({}):", contacts.len());
        for contact in contacts {
            print_contact(contact);
        }
    }
}

async fn list_contacts(db: &ContactDb) -> Result<()> {
    let contacts = db.list_all().await?;
    let all: Vec<&Contact> = contacts.iter().collect();
    print_contact_list(&all);
    Ok(())
}

async fn search_contacts(db: &ContactDb) -> Result<()> {
    let query = read_line("Search by name: ")?;
    let contacts = db.list_all().await?;
    let matches = filter_by_name(&contacts, query.trim());
    print_contact_list(&matches);
    Ok(())
}

async fn list_favorites(db: &ContactDb) -> Result<()> {
    let contacts = db.list_favorites().await?;
    let favorites: Vec<&Contact> = contacts.iter().collect();
    print_contact_list(&favorites);
    Ok(())
}

async fn add_contact(db: &ContactDb) -> Result<()> {
    let name = read_line("Name: ")?;
    let mobile_number = read_line("Mobile number (10 digits): ")?;
    let landline_number = optional(read_line("Landline number (optional): ")?);
    let photo = optional(read_line("Photo path (optional): ")?);
    let is_favorite = read_line("Mark as favorite? (y/N): ")?.eq_ignore_ascii_case("y");

    let input = NewContact {
        name,
        mobile_number,
        landline_number,
        photo,
        is_favorite,
    };

    match db.create(input).await {
        Ok(contact) => println!("✅ Saved contact #{} ({})", contact.id, contact.name),
        Err(StoreError::Validation(reason)) => println!("❌ {}", reason),
        Err(e) => return Err(e).wrap_err("Failed to save contact"),
    }
    Ok(())
}

async fn update_contact(db: &ContactDb) -> Result<()> {
    let id = read_id()?;
    let Some(current) = db.get(id).await? else {
        println!("❌ No contact with id {}", id);
        return Ok(());
    };
    print_contact(&current);

    println!("(leave a field empty to keep its current value, '-' to clear)");
    let name = keep_or(read_line("Name: ")?, current.name);
    let mobile_number = keep_or(read_line("Mobile number: ")?, current.mobile_number);
    let landline_number = keep_clear_or(read_line("Landline number: ")?, current.landline_number);
    let photo = keep_clear_or(read_line("Photo path: ")?, current.photo);

    let fields = NewContact {
        name,
        mobile_number,
        landline_number,
        photo,
        is_favorite: current.is_favorite,
    };

    match db.update(id, fields).await {
        Ok(contact) => {
            println!("✅ Updated contact #{}", contact.id);
            print_contact(&contact);
        }
        Err(StoreError::Validation(reason)) => println!("❌ {}", reason),
        Err(StoreError::NotFound(id)) => println!("❌ No contact with id {}", id),
        Err(e) => return Err(e).wrap_err("Failed to update contact"),
    }
    Ok(())
}

async fn toggle_favorite(db: &ContactDb) -> Result<()> {
    let id = read_id()?;
    let Some(current) = db.get(id).await? else {
        println!("❌ No contact with id {}", id);
        return Ok(());
    };

    let fields = NewContact {
        name: current.name,
        mobile_number: current.mobile_number,
        landline_number: current.landline_number,
        photo: current.photo,
        is_favorite: !current.is_favorite,
    };

    let contact = db.update(id, fields).await?;
    if contact.is_favorite {
        println!("❤️ {} is now a favorite", contact.name);
    } else {
        println!("💔 {} is no longer a favorite", contact.name);
    }
    Ok(())
}

async fn delete_contact(db: &ContactDb) -> Result<()> {
    let id = read_id()?;
    let confirm = read_line("Really delete? (y/N): ")?;
    if !confirm.eq_ignore_ascii_case("y") {
        println!("🚫 Kept contact #{}", id);
        return Ok(());
    }

    db.delete(id).await?;
    println!("🗑 Deleted contact #{}", id);
    Ok(())
}

fn read_id() -> Result<i64> {
    let raw = read_line("Contact id: ")?;
    raw.trim().parse().wrap_err("Contact id must be a number")
}

fn optional(input: String) -> Option<String> {
    if input.trim().is_empty() {
        None
    } else {
        Some(input.trim().to_string())
    }
}

fn keep_or(input: String, current: String) -> String {
    if input.trim().is_empty() {
        current
    } else {
        input.trim().to_string()
    }
}

fn keep_clear_or(input: String, current: Option<String>) -> Option<String> {
    match input.trim() {
        "" => current,
        "-" => None,
        value => Some(value.to_string()),
    }
}

fn read_line(prompt: &str) -> Result<String> {
    print!("{}", prompt);
    io::stdout().flush()?;
    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(input.trim().to_string())
}
