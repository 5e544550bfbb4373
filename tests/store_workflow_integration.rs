//! Integration tests for the classifieds data layer.
//! These tests verify that the store, auth, and ad repositories work
//! together the way the front-end drives them.

use souq::data::{AdRepository, AuthRepository, Store};
use souq::domain::{AdDraft, AdError, AdPatch, Condition};
use std::sync::Arc;

fn bike_draft(user_id: &str, user_email: &str) -> AdDraft {
    AdDraft {
        user_id: user_id.to_string(),
        user_email: user_email.to_string(),
        title: "دراجة هوائية جبلية".to_string(),
        description: "دراجة بحالة جيدة، استخدام سنة واحدة.".to_string(),
        images: vec![],
        category_id: "other".to_string(),
        price: 300.0,
        country: "الإمارات".to_string(),
        city: "دبي".to_string(),
        contact_number: "971501112233".to_string(),
        condition: Condition::Used,
    }
}

#[test]
fn test_full_marketplace_workflow() -> anyhow::Result<()> {
    let store = Arc::new(Store::open_in_memory()?);
    let auth = AuthRepository::new(store.clone());
    let ads = AdRepository::new(store.clone());

    // A fresh profile starts with the seeded sample listings, newest first.
    let listed = ads.list_all()?;
    assert_eq!(listed.len(), 3);
    let views: Vec<u64> = listed.iter().map(|a| a.views).collect();
    assert_eq!(views, vec![88, 250, 120]);

    // Register; signup doubles as login.
    let user = auth.signup("seller@example.com", "hunter2", "hunter2")?;
    assert_eq!(auth.current_user()?, Some(user.clone()));

    // Post an ad; it shows up on top of the listings.
    let ad = ads.create(bike_draft(&user.id, &user.email))?;
    let listed = ads.list_all()?;
    assert_eq!(listed.len(), 4);
    assert_eq!(listed[0].id, ad.id);

    // Opening the ad counts a view and persists it.
    let viewed = ads.get_by_id(&ad.id)?.unwrap();
    assert_eq!(viewed.views, 1);
    assert_eq!(ads.get_by_id(&ad.id)?.unwrap().views, 2);

    // Only the seller's ads appear on their dashboard.
    let mine = ads.list_by_user(&user.id)?;
    assert_eq!(mine.len(), 1);
    assert_eq!(mine[0].id, ad.id);

    // Editing merges fields and bumps the ad back to the top.
    let updated = ads.update(
        &ad.id,
        AdPatch {
            price: Some(250.0),
            description: Some("تخفيض: البيع مستعجل.".to_string()),
            ..Default::default()
        },
    )?;
    assert_eq!(updated.price, 250.0);
    assert_eq!(updated.title, ad.title);
    assert_eq!(ads.list_all()?[0].id, ad.id);

    // Deleting is owner-gated, and idempotent for ids that are gone.
    let err = ads
        .delete(&ad.id, "user_0")
        .expect_err("non-owner delete must fail");
    assert!(matches!(err, AdError::Forbidden));
    ads.delete(&ad.id, &user.id)?;
    ads.delete(&ad.id, &user.id)?;
    assert!(ads.get_by_id(&ad.id)?.is_none());

    // Logout empties the session slot.
    auth.logout()?;
    assert_eq!(auth.current_user()?, None);

    // Credentials still work afterwards.
    let again = auth.login("seller@example.com", "hunter2")?;
    assert_eq!(again, user);
    Ok(())
}

#[test]
fn test_data_survives_reopening_the_store() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("db.sqlite");

    let ad_id = {
        let store = Arc::new(Store::open_at(path.clone())?);
        let auth = AuthRepository::new(store.clone());
        let ads = AdRepository::new(store.clone());

        let user = auth.signup("seller@example.com", "hunter2", "hunter2")?;
        ads.create(bike_draft(&user.id, &user.email))?.id
    };

    let store = Arc::new(Store::open_at(path)?);
    let auth = AuthRepository::new(store.clone());
    let ads = AdRepository::new(store.clone());

    // The session slot is durable too: the last login is still active.
    let session = auth.current_user()?.expect("session should persist");
    assert_eq!(session.email, "seller@example.com");

    assert!(auth.login("seller@example.com", "hunter2").is_ok());
    let found = ads.get_by_id(&ad_id)?.expect("ad should persist");
    assert_eq!(found.views, 1);
    Ok(())
}

#[test]
fn test_two_profiles_are_isolated() -> anyhow::Result<()> {
    let first = AuthRepository::new(Arc::new(Store::open_in_memory()?));
    let second = AuthRepository::new(Arc::new(Store::open_in_memory()?));

    first.signup("only@example.com", "secret", "secret")?;
    assert!(matches!(
        second.login("only@example.com", "secret"),
        Err(souq::domain::AuthError::InvalidCredentials)
    ));
    Ok(())
}
