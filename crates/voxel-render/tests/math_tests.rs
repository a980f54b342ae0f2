use voxel_render::math::{Ray, Vec3};
use voxel_render::RenderError;

fn assert_close(a: Vec3, b: Vec3) {
    assert!(
        (a - b).length() < 1e-12,
        "expected {:?} to be close to {:?}",
        a,
        b
    );
}

#[test]
fn normalize_keeps_unit_vectors_fixed() {
    let unit = Vec3::new(0.0, 0.6, 0.8);
    assert_close(unit.normalize().unwrap(), unit);

    let axis = Vec3::new(0.0, 0.0, 1.0);
    assert_eq!(axis.normalize().unwrap(), axis);
}

#[test]
fn normalize_zero_vector_is_division_by_zero() {
    let err = Vec3::zero().normalize().unwrap_err();
    assert_eq!(err, RenderError::DivisionByZero("normalize"));

    assert!(Vec3::zero().normalize_to_length(3.0).is_err());
}

#[test]
fn normalize_to_length_scales_magnitude() {
    let v = Vec3::new(3.0, 0.0, 4.0).normalize_to_length(10.0).unwrap();
    assert_close(v, Vec3::new(6.0, 0.0, 8.0));
}

#[test]
fn orthogonalize_removes_parallel_component() {
    let a = Vec3::new(1.0, 2.0, 3.0);
    let b = Vec3::new(0.0, 0.0, 2.0);
    let o = a.orthogonalize(b).unwrap();
    assert_close(o, Vec3::new(1.0, 2.0, 0.0));
    assert!(o.dot(b).abs() < 1e-12);

    let parallel = Vec3::new(0.0, 0.0, -5.0).orthogonalize(b).unwrap();
    assert_eq!(parallel.norm2(), 0.0);

    assert_eq!(
        a.orthogonalize(Vec3::zero()).unwrap_err(),
        RenderError::DivisionByZero("orthogonalize")
    );
}

#[test]
fn cross_is_right_handed_and_anticommutative() {
    let x = Vec3::new(1.0, 0.0, 0.0);
    let y = Vec3::new(0.0, 1.0, 0.0);
    let z = Vec3::new(0.0, 0.0, 1.0);
    assert_eq!(x.cross(y), z);
    assert_eq!(y.cross(z), x);

    let b = Vec3::new(1.5, -2.0, 0.25);
    let c = Vec3::new(-0.5, 3.0, 7.0);
    assert_eq!(b.cross(c), -c.cross(b));
    assert!(b.cross(c).dot(b).abs() < 1e-12);
    assert!(b.cross(c).dot(c).abs() < 1e-12);
}

#[test]
fn scaled_add_and_sub_match_operators() {
    let a = Vec3::new(1.0, 1.0, 1.0);
    let b = Vec3::new(2.0, -4.0, 0.5);
    assert_eq!(a.add_scaled(b, 2.0), a + b * 2.0);
    assert_eq!(a.sub_scaled(b, 2.0), a - 2.0 * b);

    let mut c = a;
    c += b;
    assert_eq!(c, a.add(b));
    assert_eq!(a.sub(b), a - b);
}

#[test]
fn ray_parameter_runs_from_origin_to_through_point() {
    let ray = Ray::new(Vec3::new(0.0, 0.0, -2.0), Vec3::new(0.0, 2.0, 0.0));
    assert_eq!(ray.at(0.0), ray.origin);
    assert_eq!(ray.at(1.0), ray.through);
    assert_close(ray.at(0.5), Vec3::new(0.0, 1.0, -1.0));
}
