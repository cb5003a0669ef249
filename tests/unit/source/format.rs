use super::*;

fn dims(aspect: &str, res: &str) -> (u32, u32) {
    let c = Format::new(aspect.parse().unwrap(), res.parse().unwrap())
        .canvas()
        .unwrap();
    (c.width, c.height)
}

#[test]
fn table_matches_the_governing_side_rules() {
    assert_eq!(dims("1:1", "1080"), (1080, 1080));
    assert_eq!(dims("16:9", "1080"), (1080, 607));
    assert_eq!(dims("4:3", "720"), (720, 540));
    assert_eq!(dims("9:16", "4k"), (1215, 2160));
    assert_eq!(dims("3:4", "2k"), (1080, 1440));
}

#[test]
fn labels_round_trip() {
    for a in AspectRatio::ALL {
        assert_eq!(a.to_string().parse::<AspectRatio>().unwrap(), a);
    }
    for r in Resolution::ALL {
        assert_eq!(r.to_string().parse::<Resolution>().unwrap(), r);
    }
    assert_eq!("2K".parse::<Resolution>().unwrap().pixels(), 1440);
}

#[test]
fn unknown_labels_are_invalid_config() {
    assert!(matches!(
        "21:9".parse::<AspectRatio>(),
        Err(FramefxError::InvalidConfig(_))
    ));
    assert!("8k".parse::<Resolution>().is_err());
}

#[test]
fn default_format_is_square_1080() {
    assert_eq!(Format::default().to_string(), "1:1 @ 1080");
}

#[test]
fn custom_size_bypasses_the_format_table() {
    let format = Format::new(AspectRatio::Landscape16x9, Resolution::R4k);
    let size = OutputSize::resolve(format, Some(640), Some(333)).unwrap();
    assert_eq!(size, OutputSize::Custom { width: 640, height: 333 });
    assert_eq!(size.canvas().unwrap(), Canvas::new(640, 333).unwrap());
    assert_eq!(size.to_string(), "640x333");

    let table = OutputSize::resolve(format, None, None).unwrap();
    assert_eq!(table.canvas().unwrap(), format.canvas().unwrap());
}

#[test]
fn custom_size_needs_both_sides_and_a_non_empty_canvas() {
    let format = Format::default();
    for (w, h) in [(Some(640), None), (None, Some(480))] {
        assert!(matches!(
            OutputSize::resolve(format, w, h),
            Err(FramefxError::InvalidConfig(_))
        ));
    }
    let empty = OutputSize::resolve(format, Some(0), Some(10)).unwrap();
    assert!(empty.canvas().is_err());
}
