use std::alloc::{GlobalAlloc, Layout, System};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use tui_torus::core::{FrameRenderer, Grid};
use tui_torus::term::{compose_centered, Viewport};
use tui_torus::types::{TorusConfig, BLANK_GLYPH};

struct CountingAlloc;

static COUNT_ENABLED: AtomicBool = AtomicBool::new(false);
static ALLOC_COUNT: AtomicUsize = AtomicUsize::new(0);

#[global_allocator]
static GLOBAL: CountingAlloc = CountingAlloc;

unsafe impl GlobalAlloc for CountingAlloc {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            let _ = layout;
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.alloc(layout)
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        System.dealloc(ptr, layout)
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            let _ = (layout, new_size);
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.realloc(ptr, layout, new_size)
    }
}

fn with_alloc_counting<F: FnOnce()>(f: F) -> usize {
    ALLOC_COUNT.store(0, Ordering::Relaxed);
    COUNT_ENABLED.store(true, Ordering::Relaxed);
    f();
    COUNT_ENABLED.store(false, Ordering::Relaxed);
    ALLOC_COUNT.load(Ordering::Relaxed)
}

#[test]
fn render_and_compose_are_allocation_free_after_warmup() {
    let mut renderer = FrameRenderer::new(TorusConfig::default()).unwrap();
    let viewport = Viewport::new(80, 60);
    let mut fb = Grid::new(0, 0, BLANK_GLYPH);

    // Warm-up (framebuffer sizing).
    let (mut a, mut b) = (-1.9, -1.4);
    compose_centered(renderer.render_frame(a, b), viewport, &mut fb);

    let allocs = with_alloc_counting(|| {
        for _ in 0..20 {
            a += 0.007;
            b += 0.002;
            let frame = renderer.render_frame(a, b);
            compose_centered(frame, viewport, &mut fb);
        }
        // Shrinking the terminal reuses the allocation.
        compose_centered(renderer.glyphs(), Viewport::new(40, 20), &mut fb);
    });

    assert!(allocs == 0);
}
