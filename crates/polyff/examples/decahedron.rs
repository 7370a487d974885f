//! Prints volume, radius, and a |F(q)| scan along the 111 direction for
//! regular decahedra of edge 1, 2, and 3.

use polyff::math::{to_c3, R3};
use polyff::shapes;

fn main() {
    println!("# regular decahedron, edge = 1, 2, 3");
    let bodies: Vec<_> = [1.0, 2.0, 3.0]
        .iter()
        .map(|&edge| shapes::decahedron(edge).expect("decahedron is a valid body"))
        .collect();

    print!("# volume =");
    for body in &bodies {
        print!(" {}", body.volume());
    }
    println!();
    print!("# radius =");
    for body in &bodies {
        print!(" {}", body.radius());
    }
    println!();

    println!("# q vs |F(q)| for q in direction 111");
    let s3 = 3f64.sqrt();
    let mut t = 0.2;
    while t < 1.0 {
        let q = to_c3(R3::new(t / s3, t / s3, t / s3));
        print!("{t}");
        for body in &bodies {
            print!(" {}", body.formfactor(&q).expect("evaluation converges").norm());
        }
        println!();
        t *= 1.1;
    }
}
