use crate::Transcript;

#[test]
fn determinism_same_sequence_same_outputs() {
    let mut a = Transcript::new();
    let mut b = Transcript::new();

    a.send("hello");
    b.send("hello");
    assert_eq!(a.proof_log(), b.proof_log());

    let sa = a.get_random_scalar();
    let sb = b.get_random_scalar();
    assert_eq!(sa, sb);

    let na = a.receive_random_int(0, 99, true);
    let nb = b.receive_random_int(0, 99, true);
    assert_eq!(na, nb);

    assert_eq!(a.proof_log(), b.proof_log());
}

#[test]
fn different_sequences_diverge() {
    let mut a = Transcript::new();
    let mut b = Transcript::new();
    a.send("x");
    b.send("y");
    assert_ne!(a.proof_log(), b.proof_log());
    assert_ne!(a.get_random_scalar(), b.get_random_scalar());
}

#[test]
fn receive_random_int_respects_show_flag() {
    let mut t = Transcript::new();
    t.receive_random_int(0, 10, false);
    assert!(t.proof_log().is_empty());
    t.receive_random_int(0, 10, true);
    assert_eq!(t.proof_log().len(), 1);
    assert!(t.proof_log()[0].starts_with("receive_random_int:"));
}

#[test]
fn get_random_scalar_logs_its_own_tag() {
    let mut t = Transcript::new();
    t.get_random_scalar();
    assert_eq!(t.proof_log().len(), 1);
    assert!(t.proof_log()[0].starts_with("get_random_scalar:"));
}

#[test]
fn receive_random_int_stays_within_bounds() {
    let mut t = Transcript::new();
    for _ in 0..50 {
        let n = t.receive_random_int(10, 20, false);
        assert!((10..=20).contains(&n));
    }
}
