//! End-to-end sessions with scripted collaborators
//!
//! The camera, decoding engine and window are replaced by in-memory
//! stand-ins so whole sessions can be checked from first frame to summary.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::fs;
use std::path::PathBuf;
use std::rc::Rc;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use code_scanner::hud::{BAR_HEIGHT, BAR_OPACITY};
use code_scanner::{
    DecodedCode, Frame, FrameSource, HeadlessDisplay, ImageSequence, PipelineDriver, PointI,
    RenderTarget, ScannerConfig, StopReason, StyleTable, SymbolDecoder, SymbolSet, SymbolType,
};
use image::{Rgb, RgbImage};

#[derive(Default)]
struct Log {
    source_closed: bool,
    display_closed: bool,
    shown: Vec<Frame>,
    titles: Vec<String>,
    decode_calls: usize,
}

type Shared = Rc<RefCell<Log>>;

struct BlankFrames {
    remaining: usize,
    log: Shared,
}

impl FrameSource for BlankFrames {
    fn read(&mut self) -> Option<Frame> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        Some(RgbImage::from_pixel(320, 240, Rgb([200, 200, 200])))
    }

    fn close(&mut self) {
        self.log.borrow_mut().source_closed = true;
    }
}

/// Returns one scripted result list per frame, then nothing
struct Scripted {
    frames: VecDeque<Vec<DecodedCode>>,
    log: Shared,
}

impl SymbolDecoder for Scripted {
    fn decode(&mut self, _frame: &Frame, enabled: &SymbolSet) -> Vec<DecodedCode> {
        assert!(!enabled.contains(&SymbolType::Composite));
        self.log.borrow_mut().decode_calls += 1;
        self.frames.pop_front().unwrap_or_default()
    }
}

struct Recorder {
    log: Shared,
    quit_after: Option<usize>,
}

impl RenderTarget for Recorder {
    fn show(&mut self, title: &str, frame: &Frame) -> code_scanner::Result<()> {
        let mut log = self.log.borrow_mut();
        log.shown.push(frame.clone());
        log.titles.push(title.to_string());
        Ok(())
    }

    fn poll_quit(&mut self, timeout: Duration) -> bool {
        assert!(timeout <= Duration::from_millis(10));
        self.quit_after
            .is_some_and(|n| self.log.borrow().shown.len() >= n)
    }

    fn close(&mut self) {
        self.log.borrow_mut().display_closed = true;
    }
}

fn code(symbol: SymbolType, payload: &str, x: i32, y: i32) -> DecodedCode {
    DecodedCode::new(
        symbol,
        payload,
        vec![
            PointI::new(x, y),
            PointI::new(x + 60, y),
            PointI::new(x + 60, y + 60),
            PointI::new(x, y + 60),
        ],
    )
}

fn session(
    frames: usize,
    script: Vec<Vec<DecodedCode>>,
    quit_after: Option<usize>,
) -> (
    PipelineDriver<BlankFrames, Scripted, Recorder>,
    Shared,
) {
    let log = Shared::default();
    let driver = PipelineDriver::new(
        BlankFrames {
            remaining: frames,
            log: log.clone(),
        },
        Scripted {
            frames: script.into(),
            log: log.clone(),
        },
        Recorder {
            log: log.clone(),
            quit_after,
        },
        ScannerConfig::default(),
    );
    (driver, log)
}

#[test]
fn test_repeated_code_across_frames_is_logged_once() {
    let (driver, log) = session(
        3,
        vec![
            vec![code(SymbolType::QrCode, "hello", 40, 100)],
            vec![code(SymbolType::QrCode, "hello", 80, 120)],
            vec![code(SymbolType::Code128, "12345", 40, 100)],
        ],
        None,
    );
    let mut out = Vec::new();
    let summary = driver.run(&mut out).unwrap();

    assert_eq!(
        String::from_utf8(out).unwrap(),
        "[001] [QRCODE] hello\n\
         [002] [CODE128] 12345\n\
         \n\
         Session ended. Total unique codes scanned: 2\n"
    );
    assert_eq!(summary.scan_count, 2);
    assert_eq!(summary.frames, 3);
    assert_eq!(summary.reason, StopReason::EndOfStream);

    let log = log.borrow();
    assert!(log.source_closed && log.display_closed);
    assert_eq!(log.shown.len(), 3);
    assert!(
        log.titles
            .iter()
            .all(|t| t == "QR / Barcode Reader  [q = quit]")
    );
}

#[test]
fn test_exhausted_source_without_codes_ends_cleanly() {
    let (driver, log) = session(5, Vec::new(), None);
    let mut out = Vec::new();
    let summary = driver.run(&mut out).unwrap();

    assert_eq!(
        String::from_utf8(out).unwrap(),
        "\nSession ended. Total unique codes scanned: 0\n"
    );
    assert_eq!(summary.scan_count, 0);
    assert_eq!(summary.frames, 5);
    assert_eq!(log.borrow().decode_calls, 5);
    assert!(log.borrow().source_closed);
}

#[test]
fn test_quit_key_stops_before_source_is_exhausted() {
    let script = (0..100)
        .map(|i| vec![code(SymbolType::Ean13, &format!("{i:013}"), 10, 100)])
        .collect();
    let (driver, log) = session(100, script, Some(4));
    let mut out = Vec::new();
    let summary = driver.run(&mut out).unwrap();

    assert_eq!(summary.reason, StopReason::QuitRequested);
    assert_eq!(summary.frames, 4);
    assert_eq!(summary.scan_count, 4);
    let text = String::from_utf8(out).unwrap();
    assert!(text.starts_with("[001] [EAN13] 0000000000000\n"));
    assert!(text.contains("[004] [EAN13] 0000000000003\n"));
    assert!(log.borrow().display_closed);
}

#[test]
fn test_presented_frames_carry_annotations_and_hud() {
    let (driver, log) = session(
        1,
        vec![vec![code(SymbolType::QrCode, "hello", 100, 120)]],
        None,
    );
    driver.run(&mut Vec::new()).unwrap();

    let log = log.borrow();
    let frame = &log.shown[0];
    let green = StyleTable::new().color_for(&SymbolType::QrCode);
    // polygon outline
    assert_eq!(*frame.get_pixel(100, 150), green);
    // label background just above the bounding box
    assert_eq!(*frame.get_pixel(101, 110), green);
    // translucent status bar over the grey frame, below its text
    let bar = (BAR_OPACITY * 20.0 + (1.0 - BAR_OPACITY) * 200.0).round() as u8;
    assert_eq!(*frame.get_pixel(160, BAR_HEIGHT - 2), Rgb([bar, bar, bar]));
    assert_eq!(*frame.get_pixel(160, BAR_HEIGHT + 1), Rgb([200, 200, 200]));
}

#[test]
fn test_custom_palette_colours_outline() {
    let orange = Rgb([255, 128, 0]);
    let style = StyleTable::with_colors(vec![(SymbolType::Code93, orange)], Rgb([9, 9, 9]));
    let (driver, log) = session(
        1,
        vec![vec![
            code(SymbolType::Code93, "C93", 40, 100),
            code(SymbolType::Ean8, "96385074", 200, 100),
        ]],
        None,
    );
    driver.with_style(style).run(&mut Vec::new()).unwrap();

    let log = log.borrow();
    let frame = &log.shown[0];
    assert_eq!(*frame.get_pixel(40, 130), orange);
    // families missing from the table use its fallback
    assert_eq!(*frame.get_pixel(200, 130), Rgb([9, 9, 9]));
}

#[test]
fn test_malformed_payload_is_logged_with_replacement_markers() {
    let bad = DecodedCode::new(
        SymbolType::Code39,
        vec![b'A', 0xC3, b'B'],
        vec![PointI::new(10, 60), PointI::new(90, 60), PointI::new(90, 90)],
    );
    let (driver, _log) = session(1, vec![vec![bad]], None);
    let mut out = Vec::new();
    driver.run(&mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert!(text.starts_with("[001] [CODE39] A\u{FFFD}B\n"));
}

#[test]
fn test_replayed_directory_runs_through_headless_display() {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock before UNIX epoch")
        .as_nanos();
    let root: PathBuf = std::env::temp_dir().join(format!("code_scanner_replay_{nanos}"));
    let frames_dir = root.join("frames");
    let out_dir = root.join("out");
    fs::create_dir_all(&frames_dir).unwrap();
    for i in 0..3 {
        RgbImage::from_pixel(64, 64, Rgb([i * 40, 0, 0]))
            .save(frames_dir.join(format!("{i:03}.png")))
            .unwrap();
    }

    let source = ImageSequence::open(&frames_dir, None).unwrap();
    let decoder = Scripted {
        frames: vec![vec![code(SymbolType::UpcA, "036000291452", 2, 50)]; 3].into(),
        log: Shared::default(),
    };
    let display = HeadlessDisplay::writing_to(&out_dir).unwrap();
    let mut out = Vec::new();
    let summary = PipelineDriver::new(source, decoder, display, ScannerConfig::default())
        .run(&mut out)
        .unwrap();

    assert_eq!(summary.frames, 3);
    assert_eq!(summary.scan_count, 1);
    assert!(out_dir.join("frame_000002.png").exists());
    assert!(!out_dir.join("frame_000003.png").exists());
    let _ = fs::remove_dir_all(root);
}
