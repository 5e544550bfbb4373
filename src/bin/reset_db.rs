use souq::data::{Store, TABLE_ADS, TABLE_SESSION, TABLE_USERS};
use souq::domain::{Ad, User, UserRecord};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    run()
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let db_path = Store::default_path();

    if !db_path.exists() {
        println!("Store does not exist at: {}", db_path.display());
        println!("No reset needed.");
        return Ok(());
    }

    println!("Connecting to store at: {}", db_path.display());
    let store = Store::open_at(db_path.clone())?;

    let user_count = store
        .read::<Vec<UserRecord>>(TABLE_USERS)?
        .map(|users| users.len())
        .unwrap_or(0);
    let ad_count = store
        .read::<Vec<Ad>>(TABLE_ADS)?
        .map(|ads| ads.len())
        .unwrap_or(0);
    let has_session = store.read::<User>(TABLE_SESSION)?.is_some();

    println!("Current contents:");
    println!("  Users: {}", user_count);
    println!("  Ads: {}", ad_count);
    println!("  Session: {}", if has_session { "present" } else { "empty" });

    store.clear(TABLE_SESSION)?;
    println!("Cleared session");

    store.clear(TABLE_ADS)?;
    println!("Cleared ads table");

    store.clear(TABLE_USERS)?;
    println!("Cleared users table");

    let users_after = store.read::<Vec<UserRecord>>(TABLE_USERS)?;
    let ads_after = store.read::<Vec<Ad>>(TABLE_ADS)?;
    let session_after = store.read::<User>(TABLE_SESSION)?;

    if users_after.is_none() && ads_after.is_none() && session_after.is_none() {
        println!("\nStore successfully reset! All tables have been cleared.");
        println!("Sample ads will be re-seeded on the next ads access.");
    } else {
        eprintln!("\nWarning: Some tables still exist in the store.");
    }

    println!("Store location: {}", db_path.display());

    Ok(())
}
