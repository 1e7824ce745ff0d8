//! Build a tree from ten sample points and look up the nearest one to a target.

use kd_nearest::kdtree::{KDTree, KDTreeIndex};
use kd_nearest::{Point, Result};

fn main() -> Result<()> {
    let points: [Point<i32, 2>; 10] = [
        [1, 2],
        [2, 3],
        [7, 3],
        [9, 3],
        [3, 6],
        [2, 4],
        [1, 12],
        [8, 0],
        [2, 1],
        [9, 9],
    ]
    .map(Point::new);
    let target = Point::new([0, 4]);

    let tree = KDTree::from_points(points);
    let neighbor = tree.nearest(&target)?;

    println!("Sample data:");
    println!("Target point: {}", target);
    println!("Nearest point: {}", neighbor.point());
    println!("Distance: {}", neighbor.distance());
    println!("Visited nodes: {}", neighbor.visited());

    Ok(())
}
