use serde_json::json;

use super::*;

fn particles(params: serde_json::Value) -> Particles {
    Particles::from_params(Params::new("particles", &params).unwrap()).unwrap()
}

fn positions(fx: &Particles) -> Vec<Point> {
    fx.state.as_ref().unwrap().pos.clone()
}

#[test]
fn same_seed_gives_the_same_swarm() {
    let frame = Frame::from_fn(40, 30, |x, y| [(x * 6) as u8, (y * 8) as u8, 0, 255]).unwrap();
    let ctx = TickCtx::default();
    let mut a = particles(json!({"count": 50, "seed": 3}));
    let mut b = particles(json!({"count": 50, "seed": 3}));
    let oa = a.apply(&frame, 0.7, &ctx).unwrap();
    let ob = b.apply(&frame, 0.7, &ctx).unwrap();
    assert_eq!(oa, ob);
    assert_eq!(positions(&a), positions(&b));
}

#[test]
fn particles_stay_inside_the_frame() {
    let frame = Frame::filled(20, 10, [90, 90, 90, 255]).unwrap();
    let ctx = TickCtx::default();
    for mode in ["wrap", "respawn"] {
        let mut fx = particles(json!({"count": 200, "respawn": mode}));
        for _ in 0..50 {
            fx.apply(&frame, 1.0, &ctx).unwrap();
        }
        for p in positions(&fx) {
            assert!((0.0..20.0).contains(&p.x) && (0.0..10.0).contains(&p.y), "{mode}: {p:?}");
        }
    }
}

#[test]
fn zero_intensity_draws_nothing_but_state_exists() {
    let frame = Frame::filled(16, 16, [10, 20, 30, 255]).unwrap();
    let mut fx = particles(json!({"count": 20}));
    let out = fx.apply(&frame, 0.0, &TickCtx::default()).unwrap();
    assert_eq!(out, frame);
    assert_eq!(positions(&fx).len(), 20);
}

#[test]
fn drawn_dots_are_lighter_than_the_source() {
    let frame = Frame::filled(32, 32, [0, 0, 0, 255]).unwrap();
    let mut fx = particles(json!({"count": 100}));
    let out = fx.apply(&frame, 1.0, &TickCtx::default()).unwrap();
    assert!(out.data.chunks_exact(4).any(|p| p[0] > 0));
    assert!(out.data.chunks_exact(4).all(|p| p[3] == 255));
}
