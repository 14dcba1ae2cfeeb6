use super::*;
use crate::{
    foundation::core::{Canvas, Fps},
    timeline::sequencer::Sequencer,
};

fn comp(id: &str) -> Composition {
    Composition::new(
        id,
        Canvas {
            width: 16,
            height: 16,
        },
        Fps::new(30, 1).unwrap(),
        30,
        Sequencer::new(),
    )
    .unwrap()
}

#[test]
fn duplicate_ids_are_rejected() {
    let mut reg = CompositionRegistry::new();
    reg.register(comp("A")).unwrap();
    let err = reg.register(comp("A")).unwrap_err();
    assert!(matches!(err, FramecastError::Validation(_)));
    assert_eq!(reg.len(), 1);
}

#[test]
fn list_keeps_registration_order() {
    let mut reg = CompositionRegistry::new();
    reg.register(comp("B")).unwrap();
    reg.register(comp("A")).unwrap();
    let ids: Vec<_> = reg.list().into_iter().map(|i| i.id).collect();
    assert_eq!(ids, ["B", "A"]);
    assert!(reg.get("C").is_none());
    assert!(reg.require("C").unwrap_err().to_string().contains("B, A"));
}

#[test]
fn default_registry_has_both_videos() {
    let reg = default_registry().unwrap();
    let buero = reg.get("BueroNetzwerk").unwrap().info();
    assert_eq!((buero.width, buero.height), (1920, 1080));
    assert_eq!(buero.fps, Fps::new(30, 1).unwrap());
    assert_eq!(buero.duration_in_frames, 600);

    let fin = reg.get("FinancialVerificationVideo").unwrap().info();
    assert_eq!(fin.duration_in_frames, 2700);
}
