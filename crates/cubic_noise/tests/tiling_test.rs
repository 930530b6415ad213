//! # Tiling Tests
//!
//! Finite periods must repeat exactly every `period * octave` units.
//!
//! Coordinates start at `octave` so the cell left of the sample never
//! touches lattice -1: truncating remainder maps -1 to -1, not
//! `period - 1`, and the first cell right of the origin does not tile.

use cubic_noise::CubicNoise;

const TOLERANCE: f64 = 1e-9;

const CASES: [(i32, i32, i32, i32); 3] = [(99, 8, 4, 3), (-5, 5, 64, 17), (123_456, 1, 7, 7)];

#[test]
fn test_1d_tiles_along_x() {
    for (seed, octave, period_x, period_y) in CASES {
        let noise = CubicNoise::new(seed, octave, period_x, period_y).unwrap();
        let shift = f64::from(period_x * octave);

        for i in 0..2000 {
            let x = f64::from(octave) + f64::from(i) * 0.377;
            let diff = (noise.sample_1d(x) - noise.sample_1d(x + shift)).abs();
            assert!(diff < TOLERANCE, "seed {seed}: 1D tiling broken at x = {x} (diff {diff})");
        }
    }
}

#[test]
fn test_2d_tiles_along_each_axis() {
    for (seed, octave, period_x, period_y) in CASES {
        let noise = CubicNoise::new(seed, octave, period_x, period_y).unwrap();
        let shift_x = f64::from(period_x * octave);
        let shift_y = f64::from(period_y * octave);

        for i in 0..2000 {
            let x = f64::from(octave) + f64::from(i) * 0.377;
            let y = f64::from(octave) + f64::from(i) * 0.913;
            let base = noise.sample_2d(x, y);

            let diff_x = (base - noise.sample_2d(x + shift_x, y)).abs();
            let diff_y = (base - noise.sample_2d(x, y + shift_y)).abs();
            assert!(diff_x < TOLERANCE, "seed {seed}: X tiling broken at ({x}, {y})");
            assert!(diff_y < TOLERANCE, "seed {seed}: Y tiling broken at ({x}, {y})");
        }
    }
}

#[test]
fn test_known_tiled_value() {
    let noise = CubicNoise::new(99, 8, 4, 3).unwrap();
    let expected = 0.048_726_541_813_744_97;

    for (x, y) in [(45.0, 13.0), (77.0, 13.0), (45.0, 37.0)] {
        let value = noise.sample_2d(x, y);
        assert!((value - expected).abs() < 1e-12, "({x}, {y}) = {value}");
    }
}

#[test]
fn test_untiled_axis_does_not_repeat() {
    let tiled = CubicNoise::new(11, 4, 8, 0).unwrap();
    assert!(tiled.is_tiled_x());
    assert!(!tiled.is_tiled_y());

    let mut repeats = 0;
    for i in 0..500 {
        let x = 4.0 + f64::from(i) * 0.61;
        let y = 4.0 + f64::from(i) * 0.29;
        if tiled.sample_2d(x, y) == tiled.sample_2d(x, y + 32.0) {
            repeats += 1;
        }
    }
    assert!(repeats < 5, "Y axis should not tile: {repeats} repeats");
}
