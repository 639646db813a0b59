//! Command line walkthrough of the kplutl containers.

mod cli;

use clap::Parser;
use cli::{setup_logging, DemoArgs, DemoCommand};
use kplutl_calc::{active_backend_name, prelude::*};
use std::{
    error::Error as StdError,
    io::{self, Write},
};

fn main() -> Result<(), Box<dyn StdError>> {
    let launch_time = std::time::SystemTime::now();
    let args = DemoArgs::parse();
    let log_level = if args.verbose { 4 } else { args.log_level };
    setup_logging(args.log_timestamp.then_some(launch_time), log_level);
    log::debug!("Running {:?} with the {} backend", args.command, active_backend_name());

    match args.command {
        DemoCommand::Basic => basic()?,
        DemoCommand::Linalg => linalg(&mut io::stdout().lock())?,
        DemoCommand::Graphics => graphics()?,
        DemoCommand::All => {
            basic()?;
            linalg(&mut io::stdout().lock())?;
            graphics()?;
        },
        DemoCommand::Info => info(),
    }
    Ok(())
}

fn basic() -> Result<(), Box<dyn StdError>> {
    let vec_0 = Vector3f::new([-1.0, -2.0, -3.0]);
    let vec_1 = Vector3f::new([1.0, 2.0, 3.0]);
    let vec_fp = [4.0f32, 5.0, 6.0];
    let vec_2 = Vector3f::cast_from(&vec_fp);
    let vec_vec = vec![7.0f32, 8.0, 9.0];
    let vec_3 = Vector3f::try_from_iter(vec_vec)?;

    println!("vec_0: {}", vec_0);
    println!("vec_1: {}", vec_1);
    println!("vec_2: {}", vec_2);
    println!("vec_3: {}", vec_3);

    println!("vec_1 + vec_2: {}", vec_1 + vec_2);
    println!("vec_1 - vec_2: {}", vec_1 - vec_2);
    println!("vec_1 * vec_2: {}", vec_1 * vec_2);
    println!("vec_1 / vec_2: {}", vec_1 / vec_2);

    println!("Abs(vec_0): {}", abs(&vec_0));
    println!("Sqrt(vec_3): {}", sqrt(&vec_3));

    let mat_0 = Matrix3x3f::new([[-1.0, -2.0, -3.0], [-4.0, -5.0, -6.0], [-7.0, -8.0, -9.0]]);
    let mat_1 = Matrix3x3f::new([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]]);
    let mat_fp = [[9.0f32, 8.0, 7.0], [6.0, 5.0, 4.0], [3.0, 2.0, 1.0]];
    let mat_2 = Matrix3x3f::cast_from(&mat_fp);
    let mat_vec = vec![1.0f32, 4.0, 7.0, 2.0, 5.0, 8.0, 3.0, 6.0, 9.0];
    let mat_3 = Matrix3x3f::try_from_iter(mat_vec)?;

    print!("mat_0: {}", mat_0);
    print!("mat_1: {}", mat_1);
    print!("mat_2: {}", mat_2);
    print!("mat_3: {}", mat_3);

    print!("mat_1 + mat_2: {}", mat_1 + mat_2);
    print!("mat_1 - mat_2: {}", mat_1 - mat_2);
    print!("mat_1 * mat_2: {}", mat_1 * mat_2);
    print!("mat_1 / mat_2: {}", mat_1 / mat_2);

    print!("Abs(mat_0): {}", abs(&mat_0));
    print!("Sqrt(mat_3): {}", sqrt(&mat_3));
    Ok(())
}

fn linalg(out: &mut impl Write) -> io::Result<()> {
    let vec_1 = Vector3f::new([1.0, 2.0, 3.0]);
    let vec_2 = Vector3f::new([7.0, 8.0, 9.0]);

    writeln!(out, "vec_1: {}", vec_1)?;
    writeln!(out, "vec_2: {}", vec_2)?;

    writeln!(out, "DotProd(vec_1, vec_2): {}", dot_prod(&vec_1, &vec_2))?;
    writeln!(out, "CrossProd(vec_1, vec_2): {}", cross_prod(&vec_1, &vec_2))?;
    writeln!(out, "CrossProd(vec_2, vec_1): {}", cross_prod(&vec_2, &vec_1))?;

    let mat_transform = Matrix4x4f::new([
        [2.0, 0.0, 0.0, 1.0],
        [0.0, 0.5, 0.0, 1.0],
        [0.0, 0.0, 1.0, 1.0],
        [0.0, 0.0, 0.0, 1.0],
    ]);
    let vec_transform = Vector4f::splat(1.0);

    write!(out, "mat_transform: {}", mat_transform)?;
    writeln!(out, "vec_transform: {}", vec_transform)?;
    writeln!(
        out,
        "transform(mat_transform, vec_transform): {}",
        transform(&mat_transform, &vec_transform)
    )?;

    let mat_1 = Matrix::<f32, 3, 2>::new([[1.0, 2.0], [3.0, 4.0], [5.0, 6.0]]);
    write!(out, "mat_1: {}", mat_1)?;
    write!(out, "Transpose(mat_1):\n{}", transpose(&mat_1))?;

    let mat_2 = Matrix3x3f::new([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]]);
    let mat_3 = Matrix3x3f::new([[9.0, 8.0, 7.0], [6.0, 5.0, 4.0], [3.0, 2.0, 1.0]]);
    write!(out, "mat_2: {}", mat_2)?;
    write!(out, "mat_3: {}", mat_3)?;
    write!(out, "MatrixProd(mat_2, mat_3):\n{}", matrix_prod(&mat_2, &mat_3))
}

fn graphics() -> Result<(), Box<dyn StdError>> {
    let quarter_turn = std::f32::consts::FRAC_PI_2;

    print!("Translation(1, 2, 3): {}", build_translation_matrix(1.0f32, 2.0, 3.0));
    print!("Scale(2, 2, 2): {}", build_scale_matrix(2.0f32, 2.0, 2.0));
    print!("RotationZ(pi/2): {}", build_rotation_matrix_z(quarter_turn));

    let q = Quaternion::from_axis_angle(&Vector3f::new([0.0, 0.0, 1.0]), quarter_turn)?;
    println!("q: {}", q);
    print!("Rotation(q): {}", build_rotation_matrix(&q));

    let eye = Vector3f::new([0.0, 0.0, 5.0]);
    let target = Vector3f::zeros();
    let up = Vector3f::new([0.0, 1.0, 0.0]);
    print!("ViewRH: {}", build_view_matrix_rh(&eye, &target, &up));
    print!("ViewLH: {}", build_view_matrix_lh(&eye, &target, &up));
    print!(
        "OrthographicRH: {}",
        build_orthographic_projection_matrix_rh(1.0f32, -1.0, 1.0, -1.0, 0.1, 100.0)
    );
    print!(
        "PerspectiveRH: {}",
        build_perspective_projection_matrix_rh(1.0f32, -1.0, 1.0, -1.0, 0.1, 100.0)
    );
    Ok(())
}

fn info() {
    println!("backend: {}", active_backend_name());
    println!("real: {}", std::any::type_name::<Real>());
}
