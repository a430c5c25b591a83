//! End-to-end checks through the public API.

use facelens_core::pixel_stats::PixelStats;
use facelens_core::{
    analyze, recommend, AnalysisConfig, AnalysisError, AnalysisResult, Analyzer, Feature,
    LandmarkError, LandmarkSet, Measurements, Point, LANDMARK_COUNT,
};
use image::{Rgb, RgbImage};

const FACE: &[(usize, f64, f64)] = &[
    (1, 200.0, 250.0),
    (2, 200.0, 262.0),
    (6, 200.0, 200.0),
    (10, 200.0, 100.0),
    (13, 200.0, 285.0),
    (19, 200.0, 225.0),
    (33, 130.0, 200.0),
    (61, 170.0, 290.0),
    (98, 180.0, 258.0),
    (109, 140.0, 130.0),
    (127, 105.0, 190.0),
    (130, 125.0, 200.0),
    (133, 170.0, 200.0),
    (145, 150.0, 208.0),
    (152, 200.0, 340.0),
    (159, 150.0, 192.0),
    (168, 200.0, 190.0),
    (205, 140.0, 240.0),
    (234, 100.0, 220.0),
    (263, 270.0, 200.0),
    (291, 230.0, 290.0),
    (327, 220.0, 258.0),
    (338, 260.0, 130.0),
    (356, 295.0, 190.0),
    (359, 275.0, 200.0),
    (362, 230.0, 200.0),
    (374, 250.0, 208.0),
    (386, 250.0, 192.0),
    (425, 260.0, 240.0),
    (454, 300.0, 220.0),
];

fn face_points(count: usize) -> Vec<Point> {
    let mut points = vec![Point::new(200.0, 250.0); count];
    for &(idx, x, y) in FACE {
        points[idx] = Point::new(x, y);
    }
    points
}

fn face() -> LandmarkSet {
    LandmarkSet::new(face_points(LANDMARK_COUNT)).unwrap()
}

fn gradient(width: u32, height: u32) -> RgbImage {
    RgbImage::from_fn(width, height, |x, y| {
        Rgb([(x % 256) as u8, (y % 256) as u8, ((x + y) / 3 % 256) as u8])
    })
}

#[test]
fn landmark_analysis_end_to_end() {
    let img = RgbImage::from_pixel(400, 400, Rgb([140, 140, 140]));
    let result = analyze(&img, Some(&face())).unwrap();

    assert!(!result.is_basic_mode);
    assert_eq!(result.current, 84);
    assert_eq!(result.potential, 95);
    assert!(matches!(result.measurements, Measurements::Landmark(_)));
}

#[test]
fn refined_mesh_accepted() {
    let lm = LandmarkSet::new(face_points(478)).unwrap();
    let img = gradient(400, 400);
    let a = analyze(&img, Some(&lm)).unwrap();
    let b = analyze(&img, Some(&face())).unwrap();
    assert_eq!(a, b);
}

#[test]
fn short_landmark_list_rejected() {
    let err = LandmarkSet::new(face_points(100)).unwrap_err();
    assert_eq!(err, LandmarkError::InsufficientLandmarks { expected: 468, actual: 100 });
}

#[test]
fn scores_bounded_and_potential_not_below_current() {
    let images = [
        gradient(400, 400),
        gradient(64, 48),
        RgbImage::from_pixel(10, 10, Rgb([0, 0, 0])),
    ];
    for img in images {
        for lm in [Some(face()), None] {
            let result = analyze(&img, lm.as_ref()).unwrap();
            assert!(result.current <= 100);
            assert!(result.potential <= 100);
            assert!(result.potential >= result.current);
            for (feature, score) in result.features.iter() {
                assert!(score <= 100, "{feature} = {score}");
            }
        }
    }
}

#[test]
fn analysis_is_deterministic() {
    let img = gradient(300, 200);
    let lm = face();
    assert_eq!(analyze(&img, Some(&lm)).unwrap(), analyze(&img, Some(&lm)).unwrap());
    assert_eq!(analyze(&img, None).unwrap(), analyze(&img, None).unwrap());
}

#[test]
fn analyzer_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Analyzer>();
    assert_send_sync::<LandmarkSet>();
    assert_send_sync::<AnalysisResult>();

    let analyzer = Analyzer::default();
    let img = gradient(320, 240);
    let lm = face();
    let expected = analyzer.analyze(&img, Some(&lm)).unwrap();
    let expected_basic = analyzer.analyze(&img, None).unwrap();

    std::thread::scope(|s| {
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let (analyzer, img, lm) = (&analyzer, &img, &lm);
                s.spawn(move || {
                    let landmarks = if i % 2 == 0 { Some(lm) } else { None };
                    analyzer.analyze(img, landmarks).unwrap()
                })
            })
            .collect();
        for (i, handle) in handles.into_iter().enumerate() {
            let result = handle.join().unwrap();
            let want = if i % 2 == 0 { &expected } else { &expected_basic };
            assert_eq!(&result, want);
        }
    });
}

#[test]
fn image_signature_stable_across_calls() {
    let img = gradient(97, 61);
    let a = PixelStats::compute(&img).unwrap();
    let b = PixelStats::compute(&img).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.image_signature(), b.image_signature());
    assert_eq!(a.features(), b.features());
}

#[test]
fn basic_mode_uniform_gray() {
    let img = RgbImage::from_pixel(64, 64, Rgb([128, 128, 128]));
    let result = analyze(&img, None).unwrap();

    assert!(result.is_basic_mode);
    assert_eq!(result.features.skin_quality, 64);
    assert_eq!(result.current, 50);
    assert_eq!(result.potential, 65);

    let Measurements::Basic(m) = &result.measurements else {
        panic!("expected basic measurements");
    };
    assert_eq!(m.brightness, 128);
    assert_eq!(m.color_balance, "100%");
}

#[test]
fn degenerate_face_rejected() {
    let mut points = face_points(LANDMARK_COUNT);
    points[454] = points[234];
    let lm = LandmarkSet::new(points).unwrap();
    let err = analyze(&gradient(100, 100), Some(&lm)).unwrap_err();
    assert!(matches!(err, AnalysisError::DegenerateFace { .. }));
}

#[test]
fn analyzer_respects_config() {
    let analyzer = Analyzer::new(AnalysisConfig { min_face_width_px: 500.0 });
    assert!(analyzer.analyze(&gradient(100, 100), Some(&face())).is_err());
    // Basic mode ignores the face-width floor.
    assert!(analyzer.analyze(&gradient(100, 100), None).is_ok());
}

#[test]
fn result_serializes_with_wire_keys() {
    let img = RgbImage::from_pixel(400, 400, Rgb([140, 140, 140]));
    let result = analyze(&img, Some(&face())).unwrap();
    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(json["isBasicMode"], false);
    assert_eq!(json["features"]["skinQuality"], 100);
    assert_eq!(json["measurements"]["faceShape"], "Diamond");
    assert!(json["measurements"]["eyeType"].is_string());
}

#[test]
fn recommendations_without_provider_use_local_table() {
    let img = RgbImage::from_pixel(64, 64, Rgb([128, 128, 128]));
    let result = analyze(&img, None).unwrap();
    let skin = result.features.skin_quality;
    let recs = recommend(None, Feature::SkinQuality, skin, &result.measurements);
    assert_eq!(recs[0], "Daily cleansing routine 2x");
}
