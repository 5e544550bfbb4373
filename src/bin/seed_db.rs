use souq::data::{Store, TABLE_ADS, TABLE_USERS, sample_ads};
use souq::domain::UserRecord;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let db_path = Store::default_path();
    println!("Connecting to store at: {}", db_path.display());
    let store = Store::open_at(db_path)?;

    // A demo account that owns the sample listings, so login works out of
    // the box during development.
    let demo_user = UserRecord {
        id: "user_0".to_string(),
        email: "sample@example.com".to_string(),
        password: "demo1234".to_string(),
    };
    store.write(TABLE_USERS, &vec![demo_user.clone()])?;
    println!("Wrote demo account: {}", demo_user.email);

    let ads = sample_ads();
    store.write(TABLE_ADS, &ads)?;
    println!("Wrote {} sample ads:", ads.len());
    for ad in &ads {
        println!("  {} ({} views): {}", ad.id, ad.views, ad.title);
    }

    println!("\nDone. Existing users and ads were overwritten.");
    Ok(())
}
