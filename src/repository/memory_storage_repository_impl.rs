use crate::common::*;

use crate::traits::repository_traits::keyvalue_repository::*;

#[doc = "인메모리 key-value 저장소. 테스트 및 휘발성 실행에서 파일 저장소 대신 주입한다."]
#[derive(Debug, Default, new)]
pub struct MemoryStorageRepositoryImpl {
    #[new(default)]
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStorageRepositoryImpl {
    fn entries(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl KeyValueRepository for MemoryStorageRepositoryImpl {
    fn get_item(&self, key: &str) -> Option<String> {
        self.entries().get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) -> anyhow::Result<()> {
        self.entries().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> anyhow::Result<()> {
        self.entries().remove(key);
        Ok(())
    }

    fn clear(&self) -> anyhow::Result<()> {
        self.entries().clear();
        Ok(())
    }
}
