use super::ClientError;
use super::statement::{
    create_aligned_timeseries, create_database, create_timeseries, select_by_time, select_last,
    validate_path,
};
use crate::tablet::{CompressionType, TSDataType, TSEncoding};

#[test]
fn paths_must_hang_off_root() {
    assert!(validate_path("root").is_ok());
    assert!(validate_path("root.sg1.d1").is_ok());

    for bad in ["sg1.d1", "rootsg", "", "Root.sg1"] {
        let err = validate_path(bad).expect_err("not under root");
        assert!(matches!(err, ClientError::InvalidPath(p) if p == bad));
    }
}

#[test]
fn create_database_sql() {
    assert_eq!(create_database("root.sg1").unwrap(), "CREATE DATABASE root.sg1");
    assert!(create_database("sg1").is_err());
}

#[test]
fn create_timeseries_sql() {
    let sql = create_timeseries(
        "root.sg1.d1.s10",
        TSDataType::Int32,
        TSEncoding::Plain,
        CompressionType::Uncompressed,
    )
    .unwrap();

    assert_eq!(
        sql,
        "CREATE TIMESERIES root.sg1.d1.s10 WITH DATATYPE=INT32, ENCODING=PLAIN, COMPRESSOR=UNCOMPRESSED"
    );
}

#[test]
fn create_aligned_timeseries_sql() {
    let sql = create_aligned_timeseries(
        "root.sg1.d2",
        &["s0", "s1"],
        &[TSDataType::Int32, TSDataType::Text],
        &[TSEncoding::Rle, TSEncoding::Plain],
        &[CompressionType::Snappy, CompressionType::Lz4],
    )
    .unwrap();

    assert_eq!(
        sql,
        "CREATE ALIGNED TIMESERIES root.sg1.d2(s0 INT32 ENCODING=RLE COMPRESSOR=SNAPPY, s1 TEXT ENCODING=PLAIN COMPRESSOR=LZ4)"
    );
}

#[test]
fn create_aligned_timeseries_checks_arity() {
    let err = create_aligned_timeseries(
        "root.sg1.d2",
        &["s0", "s1"],
        &[TSDataType::Int32],
        &[TSEncoding::Rle, TSEncoding::Rle],
        &[CompressionType::Snappy, CompressionType::Snappy],
    )
    .expect_err("one data type for two measurements");

    assert!(matches!(
        err,
        ClientError::ParameterMismatch {
            expected: 2,
            got: 1
        }
    ));
}

#[test]
fn select_by_time_projects_all_measurements() {
    let sql = select_by_time("root.sg1.d1", &["s1", "s2"], 0, 100).unwrap();
    assert_eq!(
        sql,
        "SELECT s1, s2 FROM root.sg1.d1 WHERE time >= 0 AND time <= 100"
    );
}

#[test]
fn select_by_time_rejects_empty_inputs() {
    let none: [&str; 0] = [];
    assert!(matches!(
        select_by_time("root.sg1.d1", &none, 0, 1),
        Err(ClientError::InvalidArgument(_))
    ));
    assert!(matches!(
        select_by_time("root.sg1.d1", &["s1"], 5, 1),
        Err(ClientError::InvalidArgument(_))
    ));
}

#[test]
fn select_last_sql() {
    assert_eq!(
        select_last("root.sg1.d1", "s1").unwrap(),
        "SELECT LAST s1 FROM root.sg1.d1"
    );
}
