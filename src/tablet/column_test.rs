use super::{Column, TSDataType, TabletValue};

#[test]
fn with_capacity_allocates_typed_slots() {
    for data_type in TSDataType::ALL {
        let column = Column::with_capacity(*data_type, 7);
        assert_eq!(column.data_type(), *data_type);
        assert_eq!(column.len(), 7);
    }
}

#[test]
fn set_and_get_roundtrip_in_place() {
    let mut column = Column::with_capacity(TSDataType::Text, 3);

    column.set(1, TabletValue::Text("hello".into())).unwrap();
    assert_eq!(column.get(1), Some(TabletValue::Text("hello".into())));
    assert_eq!(column.get(0), Some(TabletValue::Text(String::new())));
    assert_eq!(column.get(3), None);
}

#[test]
fn set_rejects_other_types() {
    let mut column = Column::with_capacity(TSDataType::Double, 2);

    let got = column.set(0, TabletValue::Float(1.5)).expect_err("FLOAT into DOUBLE");
    assert_eq!(got, TSDataType::Float);
    assert_eq!(column, Column::Double(vec![0.0, 0.0]));
}

#[test]
fn byte_size_uses_fixed_widths() {
    assert_eq!(Column::with_capacity(TSDataType::Boolean, 8).byte_size(5), 5);
    assert_eq!(Column::with_capacity(TSDataType::Int32, 8).byte_size(5), 20);
    assert_eq!(Column::with_capacity(TSDataType::Float, 8).byte_size(5), 20);
    assert_eq!(Column::with_capacity(TSDataType::Int64, 8).byte_size(5), 40);
    assert_eq!(Column::with_capacity(TSDataType::Double, 8).byte_size(5), 40);
}

#[test]
fn text_byte_size_only_counts_leading_rows() {
    let column = Column::Text(vec!["ab".into(), "cde".into(), "ignored".into()]);
    assert_eq!(column.byte_size(2), 2 * 4 + 2 + 3);
}

#[test]
fn non_finite_floats_serialize_as_null() {
    let column = Column::Double(vec![f64::NAN, 2.5]);
    assert_eq!(column.json_at(0), serde_json::Value::Null);
    assert_eq!(column.json_at(1), serde_json::json!(2.5));
}
