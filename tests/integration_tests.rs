//! Integration tests for track editing and pattern identification

use segtrack::{identify, io::wav, IdentifyConfig, Track, TrackError};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn test_edit_workflow() {
    init_logging();
    let mut track = Track::new();
    let src = [-2i16, -8, 8, -5, 3, -2, -9, 6, -2, -1, 6, -9, 7, -4, -7];
    track.write(&src, 0).expect("write should succeed");
    assert_eq!(track.len(), 15);

    let mut dest = [0i16; 15];
    track.read(&mut dest, 0).expect("read should succeed");
    assert_eq!(dest, src);

    track.delete_range(3, 4).expect("delete should succeed");
    assert_eq!(track.len(), 11);
    assert_eq!(track.to_vec(), vec![-2, -8, 8, 6, -2, -1, 6, -9, 7, -4, -7]);

    // invalid delete past the shortened end
    assert!(matches!(
        track.delete_range(10, 2),
        Err(TrackError::OutOfRange { .. })
    ));
}

#[test]
fn test_splice_then_identify_then_remove() {
    init_logging();
    // content track with an ad spliced in twice
    let mut content = Track::from_samples(&[1, 2, 3, 4, 5, 6, 7, 8, 9, 10]);
    let mut ads = Track::from_samples(&[400, 500, 600, 400, 500, 600]);

    content.insert(4, &mut ads, 0, 3).unwrap();
    content.insert(10, &mut ads, 0, 3).unwrap();
    assert_eq!(content.len(), 16);
    assert_eq!(ads.len(), 0);
    assert_eq!(
        content.to_vec(),
        vec![1, 2, 3, 4, 400, 500, 600, 5, 6, 7, 400, 500, 600, 8, 9, 10]
    );

    // find both occurrences
    let ad = Track::from_samples(&[400, 500, 600]);
    let matches = identify(&content, &ad, &IdentifyConfig::default()).unwrap();
    assert_eq!(matches.len(), 2);
    assert_eq!((matches[0].start, matches[0].end), (4, 6));
    assert_eq!((matches[1].start, matches[1].end), (10, 12));
    for pair in matches.windows(2) {
        assert!(pair[1].start > pair[0].end, "matches must not overlap");
    }

    // cut them back out, later match first so earlier offsets stay valid
    for m in matches.iter().rev() {
        content.delete_range(m.start, m.end - m.start + 1).unwrap();
    }
    assert_eq!(content.to_vec(), vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10]);
}

#[test]
fn test_insert_moves_ownership_between_tracks() {
    init_logging();
    let mut dest = Track::from_samples(&[10, 20, 30, 40]);
    let mut src = Track::from_samples(&[1, 2, 3, 4, 5, 6]);

    dest.insert(2, &mut src, 2, 2).unwrap();

    assert_eq!(dest.to_vec(), vec![10, 20, 3, 4, 30, 40]);
    assert_eq!(src.to_vec(), vec![1, 2, 5, 6]);
}

#[test]
fn test_wav_round_trip_through_track() {
    init_logging();
    let mut track = Track::new();
    track.write(&[-2, -8, 8, 6, -1, 7], 0).unwrap();

    let bytes = wav::encode(&track.to_vec()).unwrap();
    assert_eq!(bytes.len(), 44 + track.len() * 2);

    let reloaded = Track::from_samples(&wav::decode(&bytes).unwrap());
    assert_eq!(reloaded.to_vec(), track.to_vec());
}

#[test]
fn test_wav_file_round_trip() {
    init_logging();
    let path = std::env::temp_dir().join("segtrack_integration_roundtrip.wav");
    let samples = [3i16, -7, 12, 0, -1];

    wav::save(&path, &samples).unwrap();
    let loaded = wav::load(&path).unwrap();
    let _ = std::fs::remove_file(&path);

    assert_eq!(loaded, samples);
}

#[test]
fn test_identify_tolerates_near_matches() {
    init_logging();
    // slightly perturbed occurrence still correlates above threshold
    let ad = [1000i16, 2000, 3000, 2000, 1000];
    let mut target = vec![0i16; 4];
    target.extend_from_slice(&[1000, 1990, 3010, 2000, 995]);
    target.extend_from_slice(&[0, 0, 0]);

    let matches = identify(
        &Track::from_samples(&target),
        &Track::from_samples(&ad),
        &IdentifyConfig::default(),
    )
    .unwrap();
    assert_eq!(matches.len(), 1);
    assert_eq!((matches[0].start, matches[0].end), (4, 8));
}
