use crate::common::*;

#[doc = r#"
    전역 로거를 설정해주는 함수.

    info 레벨 이상을 `logs/` 디렉토리의 파일에 기록하며, 하루 단위로 로테이션하고
    최근 30개 파일만 유지한다. 동일한 내용을 stdout에도 복제 출력한다.

    # Panics
    로거 초기화에 실패한 경우 애플리케이션 종료
"#]
pub fn set_global_logger() {
    let logger_handle: LoggerHandle = Logger::try_with_str("info")
        .unwrap_or_else(|e| {
            panic!("[Error][set_global_logger()] Failed to build logger spec: {:?}", e)
        })
        .log_to_file(FileSpec::default().directory("logs"))
        .rotate(
            Criterion::Age(Age::Day),
            Naming::Timestamps,
            Cleanup::KeepLogFiles(30),
        )
        .duplicate_to_stdout(Duplicate::All)
        .format(log_format)
        .start()
        .unwrap_or_else(|e| {
            panic!("[Error][set_global_logger()] Failed to start logger: {:?}", e)
        });

    /* 핸들이 drop 되면 로거가 종료되므로 프로세스 수명 동안 유지한다 */
    std::mem::forget(logger_handle);
}

fn log_format(
    w: &mut dyn Write,
    now: &mut DeferredNow,
    record: &Record,
) -> Result<(), std::io::Error> {
    write!(
        w,
        "[{}] [{}] {}",
        now.format("%Y-%m-%d %H:%M:%S"),
        record.level(),
        record.args()
    )
}
