//! 内存实体集合
//!
//! 每种资源一个 `Collection`，内部是按插入顺序排列的 `Vec`，
//! 由一把互斥锁保护。每个读写操作在整个执行期间持有该锁，
//! 因此并发的创建、编辑、删除不会产生重复 id 或丢失更新。

use std::sync::{Arc, Mutex, MutexGuard};

use uuid::Uuid;

use super::error::CoreError;

/// 可存入集合的实体
pub trait Entity: Clone + Send + 'static {
    /// 实体名称，用于错误信息 (如 "Product")
    const KIND: &'static str;

    fn id(&self) -> Uuid;
}

/// 由互斥锁保护的实体集合句柄，克隆后共享同一份数据
#[derive(Debug)]
pub struct Collection<T> {
    items: Arc<Mutex<Vec<T>>>,
}

impl<T> Clone for Collection<T> {
    fn clone(&self) -> Self {
        Self {
            items: Arc::clone(&self.items),
        }
    }
}

impl<T: Entity> Default for Collection<T> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<T: Entity> Collection<T> {
    pub fn new(seed: Vec<T>) -> Self {
        Self {
            items: Arc::new(Mutex::new(seed)),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Vec<T>>, CoreError> {
        self.items.lock().map_err(|_| {
            CoreError::InternalServerError(format!("{} collection lock poisoned", T::KIND))
        })
    }

    pub fn not_found() -> CoreError {
        CoreError::NotFound(format!("{} not found.", T::KIND))
    }

    pub fn len(&self) -> Result<usize, CoreError> {
        Ok(self.lock()?.len())
    }

    pub fn is_empty(&self) -> Result<bool, CoreError> {
        Ok(self.lock()?.is_empty())
    }

    /// 按插入顺序返回全部实体
    pub fn all(&self) -> Result<Vec<T>, CoreError> {
        Ok(self.lock()?.clone())
    }

    pub fn filter<F>(&self, predicate: F) -> Result<Vec<T>, CoreError>
    where
        F: Fn(&T) -> bool,
    {
        Ok(self
            .lock()?
            .iter()
            .filter(|item| predicate(item))
            .cloned()
            .collect())
    }

    /// 线性扫描，`better(candidate, current)` 为真时替换当前值。
    /// 相等时保留先出现的实体。集合为空时返回 `None`。
    pub fn first_by<F>(&self, better: F) -> Result<Option<T>, CoreError>
    where
        F: Fn(&T, &T) -> bool,
    {
        let items = self.lock()?;
        let mut selected: Option<&T> = None;
        for item in items.iter() {
            match selected {
                Some(current) if !better(item, current) => {}
                _ => selected = Some(item),
            }
        }
        Ok(selected.cloned())
    }

    pub fn get(&self, id: Uuid) -> Result<T, CoreError> {
        self.lock()?
            .iter()
            .find(|item| item.id() == id)
            .cloned()
            .ok_or_else(Self::not_found)
    }

    /// 追加实体；id 已存在时返回冲突错误，集合保持不变
    pub fn insert(&self, item: T) -> Result<T, CoreError> {
        let mut items = self.lock()?;
        if items.iter().any(|existing| existing.id() == item.id()) {
            return Err(CoreError::Conflict(format!(
                "{} with the same Id already exists.",
                T::KIND
            )));
        }
        items.push(item.clone());
        Ok(item)
    }

    /// 原地修改匹配 id 的实体
    pub fn modify<F>(&self, id: Uuid, update: F) -> Result<(), CoreError>
    where
        F: FnOnce(&mut T),
    {
        let mut items = self.lock()?;
        let item = items
            .iter_mut()
            .find(|item| item.id() == id)
            .ok_or_else(Self::not_found)?;
        update(item);
        Ok(())
    }

    pub fn remove(&self, id: Uuid) -> Result<(), CoreError> {
        let mut items = self.lock()?;
        let index = items
            .iter()
            .position(|item| item.id() == id)
            .ok_or_else(Self::not_found)?;
        items.remove(index);
        Ok(())
    }
}
