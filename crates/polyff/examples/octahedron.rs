//! Prints t vs |F(q(t))| for a regular octahedron, with q chosen
//! perpendicular to two opposite faces and t on a logarithmic grid.

use polyff::math::{to_c3, R3};
use polyff::shapes;

fn main() {
    let octahedron = shapes::octahedron(1.0).expect("octahedron is a valid body");
    let mut t = 0.2;
    while t < 200.0 {
        let q = to_c3(R3::new(0.0, (2.0 / 3.0f64).sqrt() * t, (1.0 / 3.0f64).sqrt() * t));
        let f = octahedron.formfactor(&q).expect("evaluation converges");
        println!("{t} {}", f.norm());
        t *= 1.002;
    }
}
