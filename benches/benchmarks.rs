use criterion::*;
use nalgebra_glm::{Vec2, Vec3};
use tandem_ecs::prelude::*;

const COUNT: usize = 10000;

#[derive(Default, Clone, Component)]
struct Translation(Vec3);

#[derive(Default, Clone, Component)]
struct Velocity(Vec3);

#[derive(Default, Clone, Component)]
struct Spin(Vec2);

type_set! {
    struct MotionSet { Translation, Velocity, Spin }
}

fn push_rows(c: &mut Criterion) {
    c.bench_function("Push rows", |b| {
        b.iter_batched(
            ComponentStorage::<MotionSet>::new::<(Translation, Velocity)>,
            |mut storage| {
                for i in 0..COUNT {
                    storage
                        .push((Translation(Vec3::zeros()), Velocity(Vec3::new(i as f32, 0.0, 0.0))))
                        .unwrap();
                }
                storage
            },
            BatchSize::PerIteration,
        );
    });
}

fn push_builders(c: &mut Criterion) {
    c.bench_function("Push builders", |b| {
        b.iter_batched(
            MasterStorage::<MotionSet>::new,
            |mut master| {
                for i in 0..COUNT {
                    master
                        .push(
                            EntityBuilder::new()
                                .with(Translation(Vec3::zeros()))
                                .with(Velocity(Vec3::new(i as f32, 0.0, 0.0))),
                        )
                        .unwrap();
                }
                master
            },
            BatchSize::PerIteration,
        );
    });
}

fn iterate_rows(c: &mut Criterion) {
    let mut storage = ComponentStorage::<MotionSet>::new::<(Translation, Velocity)>();
    for i in 0..COUNT {
        storage
            .push((Translation(Vec3::zeros()), Velocity(Vec3::new(i as f32, 1.0, 0.0))))
            .unwrap();
    }

    c.bench_function("Iterate rows", |b| {
        b.iter(|| {
            let mut sum = Vec3::zeros();
            for (translation, velocity) in storage.iter::<(Translation, Velocity)>() {
                sum += translation.0 + velocity.0;
            }
            black_box(sum)
        });
    });
}

fn query_archetypes(c: &mut Criterion) {
    let mut master = MasterStorage::<MotionSet>::new();
    for i in 0..COUNT {
        let entity = EntityBuilder::new()
            .with(Translation(Vec3::new(i as f32, 0.0, 0.0)))
            .with(Velocity(Vec3::y()));
        let entity = if i % 2 == 0 { entity.with(Spin(Vec2::x())) } else { entity };
        master.push(entity).unwrap();
    }

    c.bench_function("Query archetypes", |b| {
        b.iter(|| {
            let mut sum = Vec3::zeros();
            for rows in master.query::<(Translation, Velocity)>() {
                for (translation, velocity) in rows {
                    sum += translation.0 + velocity.0;
                }
            }
            black_box(sum)
        });
    });
}

criterion_group!(
    benchmarks,
    push_rows,
    push_builders,
    iterate_rows,
    query_archetypes,
);
criterion_main!(benchmarks);
