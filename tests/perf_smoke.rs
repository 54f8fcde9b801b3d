use sketch_kernel::physics::FlowField;
use sketch_kernel::{ParticleSystem, SketchSettings, Vector};

#[test]
fn perf_smoke_swarm_step() {
    let settings = SketchSettings::from_json(r#"{"physics":{"maxVelocity":2.0}}"#)
        .expect("settings should parse");
    let mut system = ParticleSystem::new(settings.physics);
    system.enable_perf_metrics(true);
    for x in 0..128 {
        for y in 0..32 {
            system.spawn_at(Vector::new(x as f64 * 4.0, y as f64 * 4.0));
        }
    }

    let field = FlowField::from_fn(32, 8, 16.0, |col, row| (col + row) as f64 * 0.1);
    system.step(|p| field.force_at(p.position, 0.5));

    let stats = system.perf_stats();
    assert!(stats.step_ms() >= 0.0);
    assert_eq!(stats.particles_processed(), 128 * 32);
    assert!(system.particles().iter().all(|p| p.velocity.magnitude() <= 2.0 + 1e-9));
}
