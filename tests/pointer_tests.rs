//! Directory and Parameter pointers, back references between entities and
//! the worked examples from the IGES layout rules.

mod common;

use common::builders::{create_catalog_document, create_profile_document};
use common::*;
use igesrust::entities::EntityRef;
use igesrust::*;

#[test]
fn test_directory_and_parameter_pointers_agree() {
    let doc = create_catalog_document();
    let records = parse_records(&doc.render().unwrap());
    let directory = section(&records, 'D');
    let parameter = section(&records, 'P');
    assert_eq!(directory.len() % 2, 0);

    let mut expected_pointer = 1;
    for pair in directory.chunks(2) {
        let (first, second) = (&pair[0], &pair[1]);
        assert_eq!(first.sequence % 2, 1);
        assert_eq!(first.field(1), second.field(1), "entity type repeats");

        let pointer: usize = first.field(2).parse().unwrap();
        let count: usize = second.field(4).parse().unwrap();
        assert_eq!(pointer, expected_pointer, "records are contiguous");
        assert!(count >= 1);

        for line in &parameter[pointer - 1..pointer - 1 + count] {
            assert_eq!(line.back_pointer(), first.sequence);
        }
        let record = parameter_record(&records, first.sequence);
        let type_token = record.split([',', ';']).next().unwrap();
        assert_eq!(type_token, first.field(1));
        expected_pointer += count;
    }
    assert_eq!(expected_pointer - 1, parameter.len());
}

#[test]
fn test_registry_matches_rendered_directory() {
    let doc = create_catalog_document();
    assert_eq!(doc.entity_count(), 21);

    let mut next_parameter = 1;
    for (i, entry) in doc.entities().enumerate() {
        assert_eq!(entry.directory_pointer.line() as usize, 2 * i + 1);
        assert_eq!(entry.parameter_pointer, next_parameter);
        next_parameter += entry.parameter_line_count;
    }
    assert_eq!(doc.parameter_lines().len() as u32, next_parameter - 1);
    assert_eq!(doc.directory_lines().len(), 42);
}

#[test]
fn test_point_record() {
    let mut doc = fixed_document();
    let pointer = doc.add(Point::new(3.5, 15.0, 0.0)).unwrap();
    assert_eq!(pointer.line(), 1);

    let records = parse_records(&doc.render().unwrap());
    let parameter = section(&records, 'P');
    assert_eq!(parameter.len(), 1);
    assert!(parameter[0].data.starts_with("116,3.5,15,0,0;"));
    assert_eq!(parameter[0].back_pointer(), 1);

    let directory = section(&records, 'D');
    assert_eq!(directory[0].field(1), "116");
    assert_eq!(directory[0].field(2), "1");
    assert_eq!(directory[1].field(4), "1");
}

#[test]
fn test_composite_curve_references_earlier_lines() {
    let doc = create_profile_document();
    let records = parse_records(&doc.render().unwrap());
    assert_eq!(parameter_record(&records, 5), "102,2,1,3;");

    let composite = doc.entities().last().unwrap();
    assert_eq!(composite.entity_type, EntityTypeNumber::CompositeCurve);
    assert_eq!(composite.directory_pointer.line(), 5);
    assert_eq!(composite.parameter_pointer, 3);
}

#[test]
fn test_long_hollerith_string_spans_lines() {
    let text = "N".repeat(90);
    let mut doc = fixed_document();
    doc.add(GeneralNote::new([text.as_str()])).unwrap();

    let records = parse_records(&doc.render().unwrap());
    let parameter = section(&records, 'P');
    assert_eq!(parameter.len(), 3);
    assert!(parameter.iter().all(|r| r.back_pointer() == 1));
    assert_eq!(parameter_record(&records, 1), format!("212,90H{text};"));

    let directory = section(&records, 'D');
    assert_eq!(directory[1].field(4), "3");
}

#[test]
fn test_uncommitted_reference_is_rejected() {
    let mut doc = create_profile_document();
    let before = doc.render().unwrap();

    let missing: EntityRef = None;
    let err = doc
        .add(CompositeCurve::new([DirectoryPointer::new(1), missing]))
        .unwrap_err();
    match err {
        IgesError::MissingBackReference { entity, index } => {
            assert_eq!(entity, "CompositeCurve (102/0)");
            assert_eq!(index, 3);
        }
        other => panic!("unexpected error {other:?}"),
    }

    assert_eq!(doc.entity_count(), 3);
    assert_eq!(doc.render().unwrap(), before);
}

#[test]
fn test_committed_entity_cannot_be_committed_again() {
    let mut doc = fixed_document();
    let mut entity: Entity = Line::from_coords([0.0; 3], [1.0, 0.0, 0.0]).into();
    let pointer = doc.commit(&mut entity).unwrap();
    assert!(entity.is_committed());
    assert_eq!(entity.directory_pointer(), Some(pointer));
    assert_eq!(entity.as_reference(), Value::Pointer(Some(pointer)));

    let err = doc.commit(&mut entity).unwrap_err();
    assert!(matches!(err, IgesError::AlreadyCommitted { pointer: 1 }));
    assert_eq!(doc.entity_count(), 1);
}

#[test]
fn test_transform_pointer_lands_in_directory_field_7() {
    let mut doc = fixed_document();
    let matrix = doc
        .add(TransformationMatrix::translation(Vector3::new(1.0, 2.0, 3.0)))
        .unwrap();
    let mut line = Line::from_coords([0.0; 3], [1.0, 0.0, 0.0]);
    line.common = line.common.clone().with_transform(matrix);
    let pointer = doc.add(line).unwrap();

    let records = parse_records(&doc.render().unwrap());
    let directory = section(&records, 'D');
    let first = &directory[pointer.line() as usize - 1];
    assert_eq!(first.field(7), "1");
    assert_eq!(parameter_record(&records, 1), "124,1,0,0,1,0,1,0,2,0,0,1,3;");
}

#[test]
fn test_global_is_frozen_after_first_commit() {
    let mut doc = fixed_document();
    assert!(doc.global_mut().is_some());
    doc.add(Point::new(0.0, 0.0, 0.0)).unwrap();
    assert!(doc.global_mut().is_none());
}

#[test]
fn test_pointer_past_last_commit_is_rejected() {
    let mut doc = fixed_document();
    let line = doc
        .add(Line::from_coords([0.0; 3], [1.0, 0.0, 0.0]))
        .unwrap();
    let before = doc.render().unwrap();

    let err = doc
        .add(CompositeCurve::new([Some(line), DirectoryPointer::new(99)]))
        .unwrap_err();
    assert!(matches!(
        err,
        IgesError::MissingBackReference { index: 3, .. }
    ));
    assert_eq!(doc.render().unwrap(), before);

    let mut sphere = Sphere::new(1.0, Point3::origin());
    sphere.common = sphere.common.clone().with_transform(DirectoryPointer::new(3));
    let err = doc.add(sphere).unwrap_err();
    assert!(matches!(err, IgesError::MissingTransform { pointer: 3, .. }));
    assert_eq!(doc.entity_count(), 1);
}

#[test]
fn test_entity_without_parameters_is_rejected() {
    let mut doc = fixed_document();
    let err = doc
        .add(Entity::new(EntityTypeNumber::Other(406), 0))
        .unwrap_err();
    assert!(matches!(err, IgesError::EmptyRecord));
    assert_eq!(doc.state(), DocumentState::Empty);

    let pointer = doc.add(Point::new(0.0, 0.0, 0.0)).unwrap();
    assert_eq!(pointer.line(), 1);
}

#[test]
fn test_default_field_survives_line_break() {
    let mut doc = fixed_document();
    let mut values: Vec<Value> = (0..27).map(|_| Value::from(12345678)).collect();
    values.push(Value::Default);
    values.push(Value::from(7));
    doc.add(Entity::new(EntityTypeNumber::Other(406), 0).with_parameters(values))
        .unwrap();

    let records = parse_records(&doc.render().unwrap());
    let text = parameter_record(&records, 1);
    let fields: Vec<&str> = text.trim_end_matches(';').split(',').collect();
    assert_eq!(fields.len(), 30);
    assert_eq!(&fields[27..], ["12345678", "", "7"]);
}
