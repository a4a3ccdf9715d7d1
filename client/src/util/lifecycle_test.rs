use super::*;

#[test]
fn new_flag_is_live() {
    assert!(LiveFlag::new().is_live());
    assert!(LiveFlag::default().is_live());
}

#[test]
fn cancel_is_visible_through_clones() {
    let flag = LiveFlag::new();
    let task_copy = flag.clone();
    flag.cancel();
    assert!(!task_copy.is_live());
}

#[test]
fn independent_flags_do_not_interfere() {
    let a = LiveFlag::new();
    let b = LiveFlag::new();
    a.cancel();
    assert!(b.is_live());
}
