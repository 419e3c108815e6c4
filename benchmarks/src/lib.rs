//! Scene builders shared by the benchmarks.

use glam::Vec2;
use tilerace::ecs::components::car::{Car, CarDescription};
use tilerace::ecs::components::physics::{Body, Collider};
use tilerace::ecs::components::transform::Transform2;
use tilerace::ecs::ObjectRegistry;
use tilerace::geometry::BBox;
use tilerace::physics::broadphase::UniformGrid;
use tilerace::physics::{CollisionLayers, World, WorldConfig};
use tilerace::race::spawn_car;
use tilerace::track::{Tile, TileType, Track};

/// Square world edge in pixels used by every setup.
pub const WORLD_SIZE: f32 = 16.0 * 256.0;

/// Small deterministic generator so setups do not depend on `rand`.
pub struct XorShift(u32);

impl XorShift {
    pub fn new(seed: u32) -> Self {
        Self(seed.max(1))
    }

    pub fn next_f32(&mut self) -> f32 {
        self.0 ^= self.0 << 13;
        self.0 ^= self.0 >> 17;
        self.0 ^= self.0 << 5;
        (self.0 >> 8) as f32 / (1u32 << 24) as f32
    }

    pub fn in_range(&mut self, lo: f32, hi: f32) -> f32 {
        lo + (hi - lo) * self.next_f32()
    }
}

fn empty_world() -> World {
    let mut world = World::new(WorldConfig::default()).with_layers(CollisionLayers::race());
    world.set_dimensions(0.0, WORLD_SIZE, 0.0, WORLD_SIZE, 0.0, 1000.0, 0.05);
    world
}

/// `n` moving crates scattered over the world, plus a wall border.
pub fn setup_crate_world(n: usize) -> (ObjectRegistry, World) {
    let mut registry = ObjectRegistry::new();
    let mut world = empty_world();
    let mut rng = XorShift::new(0x1234_5678);

    for i in 0..4 {
        let (pos, w, h) = match i {
            0 => (Vec2::new(WORLD_SIZE / 2.0, 4.0), WORLD_SIZE, 8.0),
            1 => (Vec2::new(WORLD_SIZE / 2.0, WORLD_SIZE - 4.0), WORLD_SIZE, 8.0),
            2 => (Vec2::new(4.0, WORLD_SIZE / 2.0), 8.0, WORLD_SIZE),
            _ => (Vec2::new(WORLD_SIZE - 4.0, WORLD_SIZE / 2.0), 8.0, WORLD_SIZE),
        };
        let wall = registry.spawn((
            Transform2::from_xy(pos.x, pos.y),
            Body::new_static(),
            Collider::rect(w, h),
        ));
        world.add_object(&mut registry, wall);
    }

    for _ in 0..n {
        let x = rng.in_range(64.0, WORLD_SIZE - 64.0);
        let y = rng.in_range(64.0, WORLD_SIZE - 64.0);
        let mut body = Body::new_dynamic(200.0);
        body.velocity = Vec2::new(rng.in_range(-200.0, 200.0), rng.in_range(-200.0, 200.0));
        let collider = if rng.next_f32() < 0.5 {
            Collider::circle(12.0)
        } else {
            Collider::rect(32.0, 32.0)
        };
        let e = registry.spawn((
            Transform2::from_xy(x, y).with_angle(rng.in_range(0.0, 360.0)),
            body,
            collider,
        ));
        world.add_object(&mut registry, e);
    }
    (registry, world)
}

/// Full 12-car field accelerating down a long straight.
pub fn setup_car_field() -> (ObjectRegistry, World) {
    let mut registry = ObjectRegistry::new();
    let mut world = empty_world();
    for index in 0..12 {
        let x = 200.0 + (index / 2) as f32 * 80.0;
        let y = 200.0 + (index % 2) as f32 * 60.0;
        let e = spawn_car(
            &mut registry,
            &mut world,
            index,
            CarDescription::computer(index, 12),
            false,
            Transform2::from_xy(x, y),
        );
        if let Ok(mut car) = registry.ecs().get::<&mut Car>(e) {
            car.controls.accelerate();
        }
    }
    (registry, world)
}

/// Bounding boxes of `n` random objects for raw grid benchmarks.
pub fn random_boxes(n: usize, half: f32) -> Vec<BBox> {
    let mut rng = XorShift::new(42);
    (0..n)
        .map(|_| {
            let c = Vec2::new(
                rng.in_range(half, WORLD_SIZE - half),
                rng.in_range(half, WORLD_SIZE - half),
            );
            BBox::from_center(c, Vec2::splat(half))
        })
        .collect()
}

pub fn empty_grid() -> UniformGrid {
    UniformGrid::new(Vec2::ZERO, Vec2::splat(WORLD_SIZE), 256.0)
}

/// A `cols` x 1 strip track with a route along it.
pub fn strip_track(cols: usize) -> Track {
    let mut track = Track::new("bench", cols, 1, 3);
    let tiles = (0..cols).map(|col| {
        let mut tile = Tile::new(col, 0);
        tile.tile_type = if col == 0 {
            TileType::Finish
        } else {
            TileType::Straight
        };
        tile.rotation = 90;
        tile.route_index = col as i32;
        tile
    });
    track
        .set_tiles(tiles)
        .expect("strip tiles are inside the grid");
    track
}
