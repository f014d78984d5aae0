//! 门店业务服务

use chrono::{Duration, Utc};
use tracing::{debug, info, warn};
use uuid::Uuid;

use super::model::Store;
use crate::core::{
    collection::Collection,
    error::CoreError,
    query::{Keyword, SortOrder},
};

const INVALID_STORE: &str = "Store data is invalid.";

#[derive(Clone, Default)]
pub struct StoreService {
    stores: Collection<Store>,
}

impl StoreService {
    pub fn new(stores: Vec<Store>) -> Self {
        Self {
            stores: Collection::new(stores),
        }
    }

    pub fn seeded() -> Self {
        let now = Utc::now();
        Self::new(vec![
            Store {
                id: Uuid::new_v4(),
                name: "Store 1".to_string(),
                country: "Country 1".to_string(),
                city: "City 1".to_string(),
                monthly_income: 5000.0,
                owner_name: "Owner 1".to_string(),
                active_since: now - Duration::days(5 * 365),
            },
            Store {
                id: Uuid::new_v4(),
                name: "Store 2".to_string(),
                country: "Country 2".to_string(),
                city: "City 2".to_string(),
                monthly_income: 7000.0,
                owner_name: "Owner 2".to_string(),
                active_since: now - Duration::days(3 * 365),
            },
        ])
    }

    pub fn invalid() -> CoreError {
        CoreError::BadRequest(INVALID_STORE.to_string())
    }

    pub fn count(&self) -> Result<usize, CoreError> {
        self.stores.len()
    }

    pub fn list(&self) -> Result<Vec<Store>, CoreError> {
        self.stores.all()
    }

    /// 名称、国家或城市包含关键字
    pub fn search(&self, keyword: &str) -> Result<Vec<Store>, CoreError> {
        let needle = Keyword::new(keyword);
        let found = self.stores.filter(|s| {
            needle.found_in(&s.name) || needle.found_in(&s.country) || needle.found_in(&s.city)
        })?;
        debug!("search '{}' matched {} stores", keyword, found.len());
        Ok(found)
    }

    pub fn by_country(&self, country: &str) -> Result<Vec<Store>, CoreError> {
        let country = Keyword::new(country);
        self.stores.filter(|s| country.equals(&s.country))
    }

    pub fn by_city(&self, city: &str) -> Result<Vec<Store>, CoreError> {
        let city = Keyword::new(city);
        self.stores.filter(|s| city.equals(&s.city))
    }

    pub fn sorted_by_income(&self, order: SortOrder) -> Result<Vec<Store>, CoreError> {
        let mut stores = self.stores.all()?;
        stores.sort_by(|a, b| order.apply(a.monthly_income.total_cmp(&b.monthly_income)));
        Ok(stores)
    }

    /// 只修改 ownerName
    pub fn transfer_ownership(&self, id: Uuid, new_owner: String) -> Result<(), CoreError> {
        if new_owner.trim().is_empty() {
            return Err(CoreError::BadRequest("Owner name is invalid.".to_string()));
        }
        self.stores
            .modify(id, |store| store.owner_name = new_owner)
            .inspect_err(|_| warn!("transfer for unknown store {}", id))?;
        info!("transferred ownership of store {}", id);
        Ok(())
    }

    pub fn oldest(&self) -> Result<Store, CoreError> {
        self.stores
            .first_by(|candidate, current| candidate.active_since < current.active_since)?
            .ok_or_else(|| CoreError::NotFound("No stores found.".to_string()))
    }

    pub fn get(&self, id: Uuid) -> Result<Store, CoreError> {
        self.stores.get(id)
    }

    /// 创建门店，保留客户端提供的 activeSince
    pub fn create(&self, payload: Option<Store>) -> Result<Store, CoreError> {
        let store = payload.ok_or_else(Self::invalid)?;
        let store = self
            .stores
            .insert(store)
            .inspect_err(|err| warn!("rejected store create: {}", err))?;
        info!("created store {} ({})", store.id, store.name);
        Ok(store)
    }

    /// 覆盖 name、country、city、monthlyIncome
    pub fn edit(&self, id: Uuid, payload: Option<Store>) -> Result<(), CoreError> {
        let update = payload
            .filter(|s| s.id == id)
            .ok_or_else(Self::invalid)?;

        self.stores.modify(id, |existing| {
            existing.name = update.name;
            existing.country = update.country;
            existing.city = update.city;
            existing.monthly_income = update.monthly_income;
        })?;
        info!("updated store {}", id);
        Ok(())
    }

    pub fn delete(&self, id: Uuid) -> Result<(), CoreError> {
        self.stores.remove(id)?;
        info!("deleted store {}", id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;

    fn store(name: &str, country: &str, city: &str, income: f64) -> Store {
        Store {
            id: Uuid::new_v4(),
            name: name.to_string(),
            country: country.to_string(),
            city: city.to_string(),
            monthly_income: income,
            owner_name: "Owner".to_string(),
            active_since: DateTime::<Utc>::default(),
        }
    }

    #[test]
    fn test_create_keeps_active_since() {
        let service = StoreService::default();
        let mut new_store = store("Corner", "Peru", "Lima", 10.0);
        new_store.active_since = Utc::now() - Duration::days(100);

        let created = service.create(Some(new_store.clone())).unwrap();
        assert_eq!(created, new_store);
        assert!(matches!(
            service.create(Some(new_store)),
            Err(CoreError::Conflict(_))
        ));
        assert!(matches!(service.create(None), Err(CoreError::BadRequest(_))));
        assert_eq!(service.count().unwrap(), 1);
    }

    #[test]
    fn test_search_spans_name_country_city() {
        let service = StoreService::new(vec![
            store("Alpha", "France", "Paris", 1.0),
            store("Beta", "Spain", "Madrid", 2.0),
            store("Gamma", "Italy", "Rome", 3.0),
        ]);
        assert_eq!(service.search("alp").unwrap().len(), 1);
        assert_eq!(service.search("SPAIN").unwrap().len(), 1);
        assert_eq!(service.search("rom").unwrap()[0].name, "Gamma");
        assert!(service.search("Berlin").unwrap().is_empty());
    }

    #[test]
    fn test_filters_are_exact() {
        let service = StoreService::new(vec![
            store("A", "France", "Paris", 1.0),
            store("B", "France", "Lyon", 2.0),
        ]);
        assert_eq!(service.by_country("france").unwrap().len(), 2);
        assert!(service.by_country("Fran").unwrap().is_empty());
        assert_eq!(service.by_city("PARIS").unwrap()[0].name, "A");
        assert!(service.by_city("Par").unwrap().is_empty());
    }

    #[test]
    fn test_sorted_by_income() {
        let service = StoreService::seeded();
        let asc: Vec<_> = service
            .sorted_by_income(SortOrder::Ascending)
            .unwrap()
            .into_iter()
            .map(|s| s.monthly_income)
            .collect();
        assert_eq!(asc, vec![5000.0, 7000.0]);

        let desc: Vec<_> = service
            .sorted_by_income(SortOrder::Descending)
            .unwrap()
            .into_iter()
            .map(|s| s.monthly_income)
            .collect();
        assert_eq!(desc, vec![7000.0, 5000.0]);
    }

    #[test]
    fn test_transfer_ownership_only_changes_owner() {
        let service = StoreService::seeded();
        let before = service.list().unwrap()[1].clone();

        service
            .transfer_ownership(before.id, "Alice".to_string())
            .unwrap();
        let after = service.get(before.id).unwrap();
        assert_eq!(after.owner_name, "Alice");
        assert_eq!(
            Store {
                owner_name: before.owner_name.clone(),
                ..after
            },
            before
        );

        assert!(matches!(
            service.transfer_ownership(Uuid::new_v4(), "Bob".to_string()),
            Err(CoreError::NotFound(_))
        ));
        assert!(matches!(
            service.transfer_ownership(before.id, "  ".to_string()),
            Err(CoreError::BadRequest(_))
        ));
    }

    #[test]
    fn test_edit_leaves_owner_and_active_since() {
        let original = store("Old", "Chile", "Santiago", 100.0);
        let service = StoreService::new(vec![original.clone()]);

        let mut update = store("New", "Chile", "Valparaiso", 250.0);
        update.id = original.id;
        update.owner_name = "Someone else".to_string();
        update.active_since = Utc::now();
        service.edit(original.id, Some(update)).unwrap();

        let stored = service.get(original.id).unwrap();
        assert_eq!(stored.name, "New");
        assert_eq!(stored.city, "Valparaiso");
        assert_eq!(stored.monthly_income, 250.0);
        assert_eq!(stored.owner_name, original.owner_name);
        assert_eq!(stored.active_since, original.active_since);

        let stranger = store("X", "Y", "Z", 0.0);
        assert!(matches!(
            service.edit(original.id, Some(stranger)),
            Err(CoreError::BadRequest(_))
        ));
    }

    #[test]
    fn test_oldest_and_delete() {
        let service = StoreService::seeded();
        let oldest = service.oldest().unwrap();
        assert_eq!(oldest.name, "Store 1");

        service.delete(oldest.id).unwrap();
        assert!(matches!(service.get(oldest.id), Err(CoreError::NotFound(_))));
        assert_eq!(service.oldest().unwrap().name, "Store 2");

        let empty = StoreService::default();
        assert!(matches!(empty.oldest(), Err(CoreError::NotFound(msg)) if msg == "No stores found."));
    }
}
