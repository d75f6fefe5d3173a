/// contains some very simple helpers for 2d vectors

pub type Vector = [f64; 2];

/// calculates the length of a vector
pub fn len(inp: Vector) -> f64 {
    ((inp[0] * inp[0]) + (inp[1] * inp[1])).sqrt()
}

/// componet-wise addition
pub fn add(mut a: Vector, b: Vector) -> Vector {
    a[0] += b[0];
    a[1] += b[1];
    a
}

/// componet-wise subtraction
pub fn sub(mut a: Vector, b: Vector) -> Vector {
    a[0] -= b[0];
    a[1] -= b[1];
    a
}

/// scales a vector by a scalar
pub fn scale(mut a: Vector, scalar: f64) -> Vector {
    a[0] *= scalar;
    a[1] *= scalar;
    a
}

/// euclidean distance between two points
pub fn dist(a: Vector, b: Vector) -> f64 {
    len(sub(a, b))
}

pub fn midpoint(a: Vector, b: Vector) -> Vector {
    scale(add(a, b), 0.5)
}

/// if the vector is longer than max it gets scaled down to exactly max,
/// the direction stays the same
pub fn cap(v: Vector, max: f64) -> Vector {
    let len = len(v);
    if len > max { scale(v, max / len) } else { v }
}

#[test]
fn cap_keeps_direction() {
    let v = cap([3., 4.], 2.5);
    assert!((len(v) - 2.5).abs() < 1e-12);
    assert!((v[0] / v[1] - 0.75).abs() < 1e-12);
    assert_eq!(cap([0.3, 0.4], 2.5), [0.3, 0.4]);
}

#[test]
fn distances() {
    assert_eq!(dist([1., 1.], [4., 5.]), 5.);
    assert_eq!(midpoint([0., 10.], [10., 0.]), [5., 5.]);
}
