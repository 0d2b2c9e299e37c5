use crate::Role;

use std::str::FromStr;

#[test]
fn test_role_as_str() {
    assert_eq!(Role::Admin.as_str(), "admin");
    assert_eq!(Role::Teacher.as_str(), "teacher");
    assert_eq!(Role::Parent.as_str(), "parent");
    assert_eq!(Role::Student.as_str(), "student");
}

#[test]
fn test_role_from_str() {
    assert_eq!(Role::from_str("admin").unwrap(), Role::Admin);
    assert_eq!(Role::from_str("teacher").unwrap(), Role::Teacher);
    assert_eq!(Role::from_str("parent").unwrap(), Role::Parent);
    assert_eq!(Role::from_str("student").unwrap(), Role::Student);
    assert!(Role::from_str("principal").is_err());
    assert!(Role::from_str("Admin").is_err());
}

#[test]
fn test_role_default_is_lowest_privilege() {
    assert_eq!(Role::default(), Role::Student);
}

#[test]
fn test_admin_satisfies_any_required_role() {
    assert!(Role::Admin.satisfies(Role::Admin));
    assert!(Role::Admin.satisfies(Role::Teacher));
    assert!(Role::Admin.satisfies(Role::Parent));
    assert!(Role::Admin.satisfies(Role::Student));
}

#[test]
fn test_non_admin_satisfies_only_itself() {
    assert!(Role::Teacher.satisfies(Role::Teacher));
    assert!(!Role::Teacher.satisfies(Role::Admin));
    assert!(!Role::Teacher.satisfies(Role::Parent));
    assert!(!Role::Student.satisfies(Role::Teacher));
}
