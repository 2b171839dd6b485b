use super::*;
use crate::ui::backend::test::TestSurface;

#[test]
fn guard_releases_on_drop() {
    let mut surface = TestSurface::new(4, 1);
    {
        let _guard = SurfaceGuard::acquire(&mut surface).unwrap();
    }
    assert_eq!(surface.entered(), 1);
    assert_eq!(surface.released(), 1);
}

#[test]
fn explicit_release_is_not_repeated_on_drop() {
    let mut surface = TestSurface::new(4, 1);
    {
        let mut guard = SurfaceGuard::acquire(&mut surface).unwrap();
        guard.release().unwrap();
        guard.release().unwrap();
    }
    assert_eq!(surface.released(), 1);
}

#[test]
fn guard_derefs_to_the_surface() {
    let mut surface = TestSurface::new(4, 1);
    {
        let mut guard = SurfaceGuard::acquire(&mut surface).unwrap();
        guard.set_cursor_visible(false).unwrap();
    }
    assert!(!surface.cursor_visible());
}
