//! Ad lifecycle operations: browsing, view counting, create/update/delete,
//! and first-run sample seeding.

use crate::data::store::{Store, TABLE_ADS};
use crate::domain::{Ad, AdDraft, AdError, AdPatch, Condition};
use chrono::{Duration, Utc};
use std::sync::Arc;
use uuid::Uuid;

/// Repository for the ads table.
///
/// Every read loads the whole table (seeding a fresh store first) and sorts
/// it by `created_at` descending; every mutation writes the whole table
/// back.
pub struct AdRepository {
    store: Arc<Store>,
}

impl AdRepository {
    pub fn new(store: Arc<Store>) -> Self {
        Self { store }
    }

    fn load(&self) -> anyhow::Result<Vec<Ad>> {
        self.seed_if_missing()?;
        let mut ads: Vec<Ad> = self.store.read(TABLE_ADS)?.unwrap_or_default();
        ads.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(ads)
    }

    fn save(&self, ads: &[Ad]) -> anyhow::Result<()> {
        self.store.write(TABLE_ADS, ads)
    }

    /// Seed a never-written ads table so a fresh profile is not empty.
    ///
    /// Idempotent: a present blob, even an empty one, is left alone.
    fn seed_if_missing(&self) -> anyhow::Result<()> {
        if self.store.read::<Vec<Ad>>(TABLE_ADS)?.is_some() {
            return Ok(());
        }
        log::info!("seeding sample ads into a fresh store");
        self.store.write(TABLE_ADS, &sample_ads())
    }

    /// The full table, newest first.
    pub fn list_all(&self) -> Result<Vec<Ad>, AdError> {
        Ok(self.load()?)
    }

    /// Fetch one ad by id.
    ///
    /// A hit counts as an engagement: `views` is incremented and persisted
    /// before the (already incremented) record is returned, so two fetches
    /// of the same ad report increasing counts.
    pub fn get_by_id(&self, id: &str) -> Result<Option<Ad>, AdError> {
        let mut ads = self.load()?;
        let Some(ad) = ads.iter_mut().find(|a| a.id == id) else {
            return Ok(None);
        };
        ad.views += 1;
        let viewed = ad.clone();
        self.save(&ads)?;
        Ok(Some(viewed))
    }

    /// Ads owned by one user, same ordering as [`list_all`](Self::list_all).
    pub fn list_by_user(&self, user_id: &str) -> Result<Vec<Ad>, AdError> {
        let mut ads = self.load()?;
        ads.retain(|a| a.user_id == user_id);
        Ok(ads)
    }

    /// Store a new ad, assigning its id, creation time, and zero views.
    pub fn create(&self, draft: AdDraft) -> Result<Ad, AdError> {
        let mut ads = self.load()?;
        let ad = Ad {
            id: format!("ad_{}", Uuid::new_v4()),
            user_id: draft.user_id,
            user_email: draft.user_email,
            title: draft.title,
            description: draft.description,
            images: draft.images,
            category_id: draft.category_id,
            price: draft.price,
            country: draft.country,
            city: draft.city,
            contact_number: draft.contact_number,
            condition: draft.condition,
            created_at: Utc::now(),
            views: 0,
        };
        ads.push(ad.clone());
        self.save(&ads)?;
        Ok(ad)
    }

    /// Merge `patch` over an existing ad and reset its `created_at`, which
    /// bumps the ad back to the top of listings. The bump is deliberate.
    ///
    /// Ownership is not re-checked here: callers must already have verified
    /// `ad.user_id == current_user.id` before offering an edit.
    pub fn update(&self, id: &str, patch: AdPatch) -> Result<Ad, AdError> {
        let mut ads = self.load()?;
        let ad = ads
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or_else(|| AdError::NotFound(id.to_string()))?;

        if let Some(title) = patch.title {
            ad.title = title;
        }
        if let Some(description) = patch.description {
            ad.description = description;
        }
        if let Some(images) = patch.images {
            ad.images = images;
        }
        if let Some(category_id) = patch.category_id {
            ad.category_id = category_id;
        }
        if let Some(price) = patch.price {
            ad.price = price;
        }
        if let Some(country) = patch.country {
            ad.country = country;
        }
        if let Some(city) = patch.city {
            ad.city = city;
        }
        if let Some(contact_number) = patch.contact_number {
            ad.contact_number = contact_number;
        }
        if let Some(condition) = patch.condition {
            ad.condition = condition;
        }
        ad.created_at = Utc::now();

        let updated = ad.clone();
        self.save(&ads)?;
        Ok(updated)
    }

    /// Remove an ad. Only the owner may delete it.
    ///
    /// A missing id is a silent no-op, so deletes are idempotent; an
    /// ownership mismatch is never ignored.
    pub fn delete(&self, id: &str, requesting_user_id: &str) -> Result<(), AdError> {
        let mut ads = self.load()?;
        let Some(ad) = ads.iter().find(|a| a.id == id) else {
            return Ok(());
        };
        if ad.user_id != requesting_user_id {
            return Err(AdError::Forbidden);
        }
        ads.retain(|a| a.id != id);
        self.save(&ads)?;
        Ok(())
    }
}

/// The fixed sample listings written into a fresh store, owned by a
/// synthetic sample user. Timestamps are relative to "now" so the newest
/// entry is always the 88-view phone ad.
pub fn sample_ads() -> Vec<Ad> {
    let now = Utc::now();
    let owner_id = "user_0".to_string();
    let owner_email = "sample@example.com".to_string();
    vec![
        Ad {
            id: "ad_1".to_string(),
            user_id: owner_id.clone(),
            user_email: owner_email.clone(),
            title: "سيارة تويوتا كامري 2022 للبيع".to_string(),
            description: "سيارة بحالة ممتازة، ماشية 25000 كم فقط. فل كامل.".to_string(),
            images: vec![],
            category_id: "cars".to_string(),
            price: 85000.0,
            country: "السعودية".to_string(),
            city: "الرياض".to_string(),
            contact_number: "966501234567".to_string(),
            condition: Condition::LikeNew,
            created_at: now - Duration::hours(5),
            views: 120,
        },
        Ad {
            id: "ad_2".to_string(),
            user_id: owner_id.clone(),
            user_email: owner_email.clone(),
            title: "شقة مفروشة للإيجار في صنعاء".to_string(),
            description: "شقة غرفتين وصالة في حي حدة، إيجار شهري.".to_string(),
            images: vec![],
            category_id: "real_estate".to_string(),
            price: 1500.0,
            country: "اليمن".to_string(),
            city: "صنعاء".to_string(),
            contact_number: "967771234567".to_string(),
            condition: Condition::Used,
            created_at: now - Duration::hours(1),
            views: 250,
        },
        Ad {
            id: "ad_3".to_string(),
            user_id: owner_id,
            user_email: owner_email,
            title: "آيفون 14 برو جديد بالكرتونة".to_string(),
            description: "لم يستخدم، لون أرجواني، ذاكرة 256 جيجا.".to_string(),
            images: vec![],
            category_id: "phones".to_string(),
            price: 4500.0,
            country: "الإمارات".to_string(),
            city: "دبي".to_string(),
            contact_number: "971501234567".to_string(),
            condition: Condition::New,
            created_at: now,
            views: 88,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repo() -> AdRepository {
        AdRepository::new(Arc::new(Store::open_in_memory().unwrap()))
    }

    fn draft(user_id: &str, title: &str) -> AdDraft {
        AdDraft {
            user_id: user_id.to_string(),
            user_email: format!("{user_id}@example.com"),
            title: title.to_string(),
            description: "وصف تجريبي".to_string(),
            images: vec![],
            category_id: "other".to_string(),
            price: 100.0,
            country: "قطر".to_string(),
            city: "الدوحة".to_string(),
            contact_number: "97450000000".to_string(),
            condition: Condition::Used,
        }
    }

    #[test]
    fn test_fresh_store_lists_seeded_ads_newest_first() -> anyhow::Result<()> {
        let ads = repo();
        let listed = ads.list_all()?;
        assert_eq!(listed.len(), 3);
        let views: Vec<u64> = listed.iter().map(|a| a.views).collect();
        assert_eq!(views, vec![88, 250, 120]);
        Ok(())
    }

    #[test]
    fn test_seeding_does_not_resurrect_deleted_ads() -> anyhow::Result<()> {
        let ads = repo();
        for ad in ads.list_all()? {
            ads.delete(&ad.id, "user_0")?;
        }
        // The blob exists (empty), so the seeder must leave it alone.
        assert!(ads.list_all()?.is_empty());
        Ok(())
    }

    #[test]
    fn test_create_then_view_increments_views() -> anyhow::Result<()> {
        let ads = repo();
        let ad = ads.create(draft("user_a", "دراجة هوائية"))?;
        assert_eq!(ad.views, 0);
        assert!(ad.id.starts_with("ad_"));

        let viewed = ads.get_by_id(&ad.id)?.unwrap();
        assert_eq!(viewed.views, 1);
        assert_eq!(viewed.title, ad.title);

        // Strictly increasing across repeated fetches.
        for expected in 2..=4 {
            assert_eq!(ads.get_by_id(&ad.id)?.unwrap().views, expected);
        }
        Ok(())
    }

    #[test]
    fn test_get_by_id_missing_is_none() -> anyhow::Result<()> {
        let ads = repo();
        assert!(ads.get_by_id("ad_missing")?.is_none());
        Ok(())
    }

    #[test]
    fn test_new_ad_sorts_first() -> anyhow::Result<()> {
        let ads = repo();
        let ad = ads.create(draft("user_a", "طاولة طعام"))?;
        assert_eq!(ads.list_all()?[0].id, ad.id);
        Ok(())
    }

    #[test]
    fn test_update_merges_and_bumps_to_top() -> anyhow::Result<()> {
        let ads = repo();
        let first = ads.create(draft("user_a", "كنبة"))?;
        let second = ads.create(draft("user_a", "مكتب"))?;
        assert_eq!(ads.list_all()?[0].id, second.id);

        let patch = AdPatch {
            price: Some(0.0),
            ..Default::default()
        };
        let updated = ads.update(&first.id, patch)?;
        assert_eq!(updated.price, 0.0);
        assert_eq!(updated.title, "كنبة");
        assert!(updated.created_at > first.created_at);
        assert_eq!(ads.list_all()?[0].id, first.id);

        // A zero price is stored verbatim, not rewritten.
        let stored = ads.list_all()?;
        let stored = stored.iter().find(|a| a.id == first.id).unwrap();
        assert_eq!(stored.price, 0.0);
        Ok(())
    }

    #[test]
    fn test_update_missing_ad_fails() {
        let ads = repo();
        let err = ads
            .update("ad_missing", AdPatch::default())
            .expect_err("update of a missing ad must fail");
        assert!(matches!(err, AdError::NotFound(_)));
    }

    #[test]
    fn test_delete_is_owner_gated() -> anyhow::Result<()> {
        let ads = repo();
        let ad = ads.create(draft("user_a", "خزانة"))?;

        let err = ads
            .delete(&ad.id, "user_b")
            .expect_err("non-owner delete must fail");
        assert!(matches!(err, AdError::Forbidden));
        assert!(ads.list_all()?.iter().any(|a| a.id == ad.id));

        ads.delete(&ad.id, "user_a")?;
        assert!(ads.list_all()?.iter().all(|a| a.id != ad.id));
        Ok(())
    }

    #[test]
    fn test_delete_missing_id_is_a_no_op() -> anyhow::Result<()> {
        let ads = repo();
        let before = ads.list_all()?;
        ads.delete("ad_missing", "user_whoever")?;
        assert_eq!(ads.list_all()?, before);
        Ok(())
    }

    #[test]
    fn test_list_by_user_filters_and_keeps_order() -> anyhow::Result<()> {
        let ads = repo();
        let a1 = ads.create(draft("user_a", "أول"))?;
        ads.create(draft("user_b", "دخيل"))?;
        let a2 = ads.create(draft("user_a", "ثاني"))?;

        let mine = ads.list_by_user("user_a")?;
        let ids: Vec<&str> = mine.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec![a2.id.as_str(), a1.id.as_str()]);

        // Browsing a filtered list does not touch view counts.
        assert!(mine.iter().all(|a| a.views == 0));
        Ok(())
    }
}
