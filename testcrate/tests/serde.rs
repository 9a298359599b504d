use swint::{word, Word};

#[test]
fn serde() {
    let w = word(0xAB_CDEF);
    let s = "11259375";
    assert_eq!(ron::to_string(&w).unwrap(), s);

    let w2: Word = ron::from_str(s).unwrap();
    assert_eq!(w, w2);

    assert_eq!(ron::from_str::<Word>("0").unwrap(), Word::ZERO);
    assert_eq!(ron::from_str::<Word>("16777215").unwrap(), Word::MAX);

    // the 24-bit invariant is re-checked on the way in
    assert!(ron::from_str::<Word>("16777216").is_err());
    assert!(ron::from_str::<Word>("4294967295").is_err());
}
