use crate::common::*;

use crate::traits::repository_traits::keyvalue_repository::*;

#[doc = r#"
    파일 기반 key-value 저장소.

    전체 엔트리를 단일 JSON 객체(string → string)로 하나의 파일에 기록한다.
    브라우저 localStorage처럼 동작해야 하므로 읽기는 동기식이며, 파일이 없거나
    내용이 파싱되지 않으면 빈 저장소로 degrade 한다. 쓰기는 매 변경마다
    전체 맵을 다시 기록한다(단일 UI 컨텍스트 가정, 잠금 없음).
"#]
#[derive(Debug)]
pub struct FileStorageRepositoryImpl {
    storage_path: PathBuf,
    entries: Mutex<HashMap<String, String>>,
}

impl FileStorageRepositoryImpl {
    pub fn new(storage_path: &str) -> Self {
        let storage_path: PathBuf = PathBuf::from(storage_path);
        let entries: HashMap<String, String> = Self::load_entries(&storage_path);

        FileStorageRepositoryImpl {
            storage_path,
            entries: Mutex::new(entries),
        }
    }

    fn load_entries(storage_path: &Path) -> HashMap<String, String> {
        let raw: String = match fs::read_to_string(storage_path) {
            Ok(raw) => raw,
            Err(_) => return HashMap::new(),
        };

        match serde_json::from_str::<HashMap<String, String>>(&raw) {
            Ok(entries) => entries,
            Err(e) => {
                warn!(
                    "[FileStorageRepositoryImpl->load_entries] '{:?}' is unparseable, starting from an empty store: {:?}",
                    storage_path, e
                );
                HashMap::new()
            }
        }
    }

    fn entries(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn persist(&self, entries: &HashMap<String, String>) -> anyhow::Result<()> {
        if let Some(parent) = self.storage_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let serialized: String = serde_json::to_string(entries)?;
        fs::write(&self.storage_path, serialized)?;

        Ok(())
    }
}

impl KeyValueRepository for FileStorageRepositoryImpl {
    fn get_item(&self, key: &str) -> Option<String> {
        self.entries().get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) -> anyhow::Result<()> {
        let mut entries = self.entries();
        entries.insert(key.to_string(), value.to_string());
        self.persist(&entries)
    }

    fn remove_item(&self, key: &str) -> anyhow::Result<()> {
        let mut entries = self.entries();
        entries.remove(key);
        self.persist(&entries)
    }

    fn clear(&self) -> anyhow::Result<()> {
        let mut entries = self.entries();
        entries.clear();
        self.persist(&entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn storage_path(dir: &TempDir) -> String {
        dir.path()
            .join("chart_storage.json")
            .to_string_lossy()
            .to_string()
    }

    #[test]
    fn entries_survive_a_new_instance_over_the_same_file() {
        let dir: TempDir = TempDir::new().unwrap();
        let path: String = storage_path(&dir);

        let storage: FileStorageRepositoryImpl = FileStorageRepositoryImpl::new(&path);
        storage.set_item("currentChartData", "{\"title\":\"t\"}").unwrap();

        let reopened: FileStorageRepositoryImpl = FileStorageRepositoryImpl::new(&path);
        assert_eq!(
            reopened.get_item("currentChartData"),
            Some(String::from("{\"title\":\"t\"}"))
        );
    }

    #[test]
    fn missing_file_starts_as_an_empty_store() {
        let dir: TempDir = TempDir::new().unwrap();

        let storage: FileStorageRepositoryImpl = FileStorageRepositoryImpl::new(&storage_path(&dir));

        assert_eq!(storage.get_item("savedCharts"), None);
    }

    #[test]
    fn corrupt_file_starts_as_an_empty_store() {
        let dir: TempDir = TempDir::new().unwrap();
        let path: String = storage_path(&dir);
        fs::write(&path, "not json at all").unwrap();

        let storage: FileStorageRepositoryImpl = FileStorageRepositoryImpl::new(&path);

        assert_eq!(storage.get_item("savedCharts"), None);
    }
}
