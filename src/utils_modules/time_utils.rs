use crate::common::*;

#[doc = "이미지 파일명에 사용할 현재 로컬 시각 문자열을 반환해주는 함수"]
pub fn get_current_timestamp_for_filename() -> String {
    Local::now().format("%Y%m%dT%H%M%S%3f").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timestamp_is_filesystem_safe() {
        let stamp: String = get_current_timestamp_for_filename();

        assert!(stamp.chars().all(|c| c.is_ascii_alphanumeric()));
    }
}
