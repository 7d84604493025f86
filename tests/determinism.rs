use tatters::{Button, ClothConfig, Link, NoOpStepObserver, Pointer, Simulation, Vec2};

/// Drag across the cloth, then cut through it, on an uneven frame cadence.
fn scripted_run(frame_ms: &[f64]) -> (Vec<Vec2<f32>>, Vec<Link>) {
    let params = ClothConfig::new()
        .with_quality(16)
        .with_viewport(Vec2::new(640.0, 480.0))
        .build()
        .unwrap();
    let mut sim = Simulation::with_mesh(params, 640.0);
    let bounds = Vec2::new(640.0, 480.0);

    let mut pointer = Pointer::new();
    pointer.move_to(Vec2::new(200.0, 200.0));
    sim.start(0.0, &pointer);

    let mut now = 0.0f64;
    for (i, dt) in frame_ms.iter().cycle().take(240).enumerate() {
        now += dt;
        let t = i as f32;
        match i {
            20 => pointer.press(Button::Primary),
            100 => pointer.release(Button::Primary),
            140 => pointer.press(Button::Secondary),
            _ => {}
        }
        pointer.move_to(Vec2::new(200.0 + t * 1.5, 200.0 + (t * 0.1).sin() * 40.0));
        sim.advance(now, &pointer, bounds, &mut NoOpStepObserver);
    }

    (sim.mesh().positions(), sim.mesh().links().to_vec())
}

#[test]
fn cloth_deterministic() {
    let cadence = [16.0, 7.0, 33.0, 4.0, 16.6];
    let results: Vec<_> = (0..5).map(|_| scripted_run(&cadence)).collect();

    for (positions, links) in &results[1..] {
        assert_eq!(&results[0].1, links);
        for (a, b) in results[0].0.iter().zip(positions.iter()) {
            assert_eq!(a.x, b.x);
            assert_eq!(a.y, b.y);
        }
    }
    // The cut really happened.
    assert!(results[0].1.len() < 2 * 16 * 15);
}

#[test]
fn same_steps_regardless_of_display_rate() {
    // 120 Hz and 30 Hz displays covering the same wall-clock span.
    let params = ClothConfig::<f64>::new().with_quality(10).build().unwrap();
    let bounds = Vec2::new(800.0, 600.0);
    let pointer = Pointer::new();

    let mut fast = Simulation::with_mesh(params.clone(), 800.0);
    let mut slow = Simulation::with_mesh(params, 800.0);
    fast.start(0.0, &pointer);
    slow.start(0.0, &pointer);

    let mut fast_steps = 0;
    for i in 1..=240 {
        fast_steps += fast.advance(f64::from(i) * 8.0, &pointer, bounds, &mut NoOpStepObserver);
    }
    let mut slow_steps = 0;
    for i in 1..=60 {
        slow_steps += slow.advance(f64::from(i) * 32.0, &pointer, bounds, &mut NoOpStepObserver);
    }

    assert_eq!(fast_steps, slow_steps);
    assert_eq!(fast.mesh().positions(), slow.mesh().positions());
}
