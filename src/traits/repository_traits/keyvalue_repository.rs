use crate::common::*;

#[doc = r#"
    문자열 키로 주소를 지정하는 동기식 로컬 저장소 경계.

    브라우저 localStorage와 같은 형태의 계약이며, 프로덕션에서는 파일 기반,
    테스트에서는 인메모리 구현을 주입한다. 읽기는 값이 없으면 None을 돌려줄 뿐
    오류를 내지 않는다.
"#]
pub trait KeyValueRepository: Send + Sync {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&self, key: &str, value: &str) -> anyhow::Result<()>;
    #[allow(dead_code)]
    fn remove_item(&self, key: &str) -> anyhow::Result<()>;
    #[allow(dead_code)]
    fn clear(&self) -> anyhow::Result<()>;
}
