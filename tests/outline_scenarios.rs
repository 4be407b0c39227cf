use mask_outline::{
    render_scene, Canvas, Circle, Error, Execution, GrayBuffer, Mask, MaskSource, OutlineRenderer, OutlineStyle,
    Point, RenderConfig, ShapeSampler,
};

const SIZE: usize = 512;

fn default_circle() -> Circle {
    Circle::centered(SIZE, SIZE, 100.0)
}

fn pixel_center(x: usize, y: usize) -> Point {
    Point::new(x as f64 + 0.5, y as f64 + 0.5)
}

fn temp_png(tag: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!("mask-outline-{tag}-{}.png", std::process::id()))
}

#[test]
fn circle_simple_darkens_the_rim_and_nothing_else() {
    let before = Canvas::with_gradient(SIZE, SIZE);
    let mut after = before.clone();
    let circle = default_circle();
    let stats = OutlineRenderer::from_parts(ShapeSampler::Circle(circle), OutlineStyle::Simple)
        .render(&mut after)
        .unwrap();

    // rim pixels on the axes: centre just outside, inner neighbours inside
    for (x, y) in [(356, 256), (155, 256), (256, 356), (256, 155)] {
        let (b, a) = (before.buffer.get(x, y).unwrap(), after.buffer.get(x, y).unwrap());
        assert!(a < b, "({x},{y}) went {b} -> {a}");
    }

    let mut darkened = 0;
    for y in 0..SIZE {
        for x in 0..SIZE {
            let (b, a) = (before.buffer.get(x, y).unwrap(), after.buffer.get(x, y).unwrap());
            assert!(a <= b, "simple style never lightens, ({x},{y})");
            if a < b {
                darkened += 1;
            }
            if circle.signed_distance(pixel_center(x, y)).abs() > 2.0 {
                assert_eq!(a, b, "({x},{y}) is far from the rim");
            }
        }
    }
    // roughly one pixel per unit of circumference
    assert!(darkened > 400, "only {darkened} pixels darkened");
    assert_eq!(stats.painted, darkened);
}

#[test]
fn uniform_mask_leaves_canvas_unchanged() {
    for style in [OutlineStyle::BlackAndWhite, OutlineStyle::Simple] {
        for execution in [Execution::Serial, Execution::Parallel] {
            let before = Canvas::with_gradient(SIZE, SIZE);
            let mut after = before.clone();
            let mask = Mask::from_fn(SIZE, SIZE, |_, _| true);
            let stats = OutlineRenderer::from_parts(ShapeSampler::Mask(mask), style)
                .with_execution(execution)
                .render(&mut after)
                .unwrap();
            assert_eq!(after, before);
            assert_eq!(stats.painted, 0);
            assert_eq!(stats.visited, (SIZE - 2) * (SIZE - 2));
        }
    }
}

#[test]
fn single_pixel_shape_gets_a_symmetric_ring() {
    for style in [OutlineStyle::BlackAndWhite, OutlineStyle::Simple] {
        let mask = Mask::from_fn(21, 21, |x, y| x == 10 && y == 10);
        let mut canvas = Canvas::from_buffer(GrayBuffer::new(21, 21));
        canvas.buffer.fill(200);
        OutlineRenderer::from_parts(ShapeSampler::Mask(mask), style)
            .render(&mut canvas)
            .unwrap();
        let px = |x: usize, y: usize| canvas.buffer.get(x, y).unwrap();

        let edges = [px(9, 10), px(11, 10), px(10, 9), px(10, 11)];
        let corners = [px(9, 9), px(11, 9), px(9, 11), px(11, 11)];
        assert!(edges.iter().all(|&v| v == edges[0]), "{style:?} edges {edges:?}");
        assert!(corners.iter().all(|&v| v == corners[0]), "{style:?} corners {corners:?}");

        // v = 1/8 on edges, 1/16 on corners: both inked with black, edges harder
        assert!(edges[0] < 200);
        assert!(corners[0] < 200);
        assert!(edges[0] < corners[0]);
        // the shape pixel itself (v = 1/4) is fully opaque
        assert!(px(10, 10) < edges[0]);

        // two pixels away the window is all outside
        for (x, y) in [(8, 10), (12, 10), (10, 8), (10, 12), (8, 8), (12, 12)] {
            assert_eq!(px(x, y), 200, "{style:?} ({x},{y})");
        }
    }
}

#[test]
fn rasterized_circle_matches_analytic_circle() {
    let circle = default_circle();
    for style in [OutlineStyle::BlackAndWhite, OutlineStyle::Simple] {
        let mut analytic = Canvas::with_gradient(SIZE, SIZE);
        let mut raster = analytic.clone();
        OutlineRenderer::from_parts(ShapeSampler::Circle(circle), style)
            .render(&mut analytic)
            .unwrap();
        OutlineRenderer::from_parts(ShapeSampler::Mask(Mask::from_circle(SIZE, SIZE, &circle)), style)
            .render(&mut raster)
            .unwrap();
        assert_eq!(analytic, raster);
    }
}

#[test]
fn second_pass_is_not_idempotent() {
    let renderer = OutlineRenderer::from_parts(ShapeSampler::Circle(default_circle()), OutlineStyle::BlackAndWhite);
    let mut canvas = Canvas::with_gradient(SIZE, SIZE);
    renderer.render(&mut canvas).unwrap();
    let once = canvas.clone();
    renderer.render(&mut canvas).unwrap();
    // semi-transparent rim pixels blend again over their own output
    assert_ne!(canvas, once);
    // pixels the first pass left alone stay alone
    let plain = Canvas::with_gradient(SIZE, SIZE);
    for y in 0..SIZE {
        for x in 0..SIZE {
            if once.buffer.get(x, y) == plain.buffer.get(x, y)
                && default_circle().signed_distance(pixel_center(x, y)).abs() > 2.0
            {
                assert_eq!(canvas.buffer.get(x, y), plain.buffer.get(x, y));
            }
        }
    }
}

#[test]
fn mask_file_drives_the_same_pass() {
    let path = temp_png("square");
    let mut img = image::GrayImage::new(64, 64);
    for y in 20..44 {
        for x in 20..44 {
            img.put_pixel(x, y, image::Luma([255]));
        }
    }
    img.save(&path).unwrap();

    let config = RenderConfig {
        width: 64,
        height: 64,
        mask: MaskSource::Image(path.clone()),
        style: OutlineStyle::Simple,
        execution: Execution::Serial,
    };
    let canvas = render_scene(&config);
    let _ = std::fs::remove_file(&path);
    let canvas = canvas.unwrap();
    let plain = Canvas::with_gradient(64, 64);

    // just outside the square's left edge: v = 1/4, opaque black
    assert_eq!(canvas.buffer.get(19, 30), Some(0));
    // deep inside and far outside untouched
    assert_eq!(canvas.buffer.get(32, 32), plain.buffer.get(32, 32));
    assert_eq!(canvas.buffer.get(5, 5), plain.buffer.get(5, 5));
}

#[test]
fn mask_file_smaller_than_canvas_is_rejected() {
    let path = temp_png("small");
    image::GrayImage::new(32, 64).save(&path).unwrap();
    let config = RenderConfig {
        width: 64,
        height: 64,
        mask: MaskSource::Image(path.clone()),
        ..RenderConfig::default()
    };
    let result = OutlineRenderer::new(&config);
    let _ = std::fs::remove_file(&path);
    match result {
        Err(Error::DimensionMismatch { mask_width, canvas_width, .. }) => {
            assert_eq!((mask_width, canvas_width), (32, 64));
        }
        Err(other) => panic!("unexpected error {other}"),
        Ok(_) => panic!("undersized mask was accepted"),
    }
}
