use crate::common::*;

#[doc = r#"
    환경변수를 읽어와서 반환하고, 환경변수가 설정되지 않은 경우 치명적 오류로 처리하는 함수.

    애플리케이션의 필수 설정값들이 환경변수로 관리되므로, 해당 환경변수가 없으면
    애플리케이션이 정상 동작할 수 없기 때문에 panic으로 즉시 종료시킨다.

    # Arguments
    * `key` - 조회할 환경변수 키명

    # Returns
    * `String` - 환경변수 값

    # Panics
    환경변수가 설정되지 않은 경우 애플리케이션 종료
"#]
fn get_env_or_panic(key: &str) -> String {
    match env::var(key) {
        Ok(val) => val,
        Err(_) => {
            let msg = format!("[ENV file read Error] '{}' must be set", key);
            error!("{}", msg);
            panic!("{}", msg);
        }
    }
}

#[doc = r#"
    차트 빌더 설정 파일의 경로를 환경변수에서 읽어와 전역 변수로 초기화.

    `CHART_CONFIG_PATH` 환경변수를 통해 TOML 형식의 설정 파일 경로를 지정받는다.
    이 파일에는 로컬 저장소 파일 경로, 이미지 출력 디렉토리, 렌더링 API 연결 정보 등
    애플리케이션 실행에 필요한 모든 설정 정보가 포함되어 있다.
    once_lazy를 사용하여 첫 접근 시에만 초기화되며, 이후에는 캐시된 값을 재사용한다.

    # 예상 파일 내용
    - system 설정 (저장소 파일 경로, 이미지 출력 디렉토리)
    - render_api 설정 (엔드포인트, 타임아웃, 차트 크기, 배경색)

    # Panics
    `CHART_CONFIG_PATH` 환경변수가 설정되지 않은 경우
"#]
pub static CHART_CONFIG_PATH: once_lazy<String> =
    once_lazy::new(|| get_env_or_panic("CHART_CONFIG_PATH"));

#[doc = "헤드리스 빌드에서 사용할 차트 타입. 미설정 시 line 차트로 동작한다."]
pub static CHART_TYPE: once_lazy<String> =
    once_lazy::new(|| env::var("CHART_TYPE").unwrap_or_else(|_| String::from("line")));
