use std::fs::File;
use std::io::{self, Write};
use std::path::Path;
use std::{env, error::Error};

/// Element types cycled through when building a tuple shape of some arity.
const ELEMENTS: [&str; 8] = ["u8", "u16", "u32", "u64", "i8", "i16", "i32", "i64"];

/// The largest arity for which equivalence tests are generated.
const MAX_TESTED_ARITY: usize = 8;

fn main() -> Result<(), Box<dyn Error>> {
    // Both layouts must agree on every element of every shape; generating one test per arity
    // catches a slot or peel implementation that is wrong for only some positions.
    println!("cargo:rerun-if-changed=build.rs");

    let out_dir = env::var("OUT_DIR")?;
    let dest_path = Path::new(&out_dir).join("layout_equivalence.rs");
    let mut f = File::create(&dest_path)?;

    writeln!(f, "use crate::prelude::*;")?;
    writeln!(f, "use crate::select::ElementAt;")?;
    writeln!(f, "use static_assertions::assert_type_eq_all;")?;
    writeln!(f)?;

    for arity in 1..=MAX_TESTED_ARITY {
        equivalence_test(&mut f, arity)?;
    }
    Ok(())
}

fn equivalence_test(f: &mut impl Write, arity: usize) -> io::Result<()> {
    let types: Vec<&str> = (0..arity).map(|i| ELEMENTS[i % ELEMENTS.len()]).collect();
    let shape = format!("({},)", types.join(", "));
    let values = types
        .iter()
        .enumerate()
        .map(|(i, ty)| format!("{}{}", i, ty))
        .collect::<Vec<_>>()
        .join(", ");

    writeln!(f, "#[test]")?;
    writeln!(f, "fn layouts_agree_at_arity_{}() {{", arity)?;
    writeln!(f, "    type Shape = {};", shape)?;
    writeln!(f, "    let values: Shape = ({},);", values)?;
    writeln!(f, "    let mut flat = Flat::new(values);")?;
    writeln!(f, "    let mut nested = Nested::new(values);")?;
    writeln!(f, "    assert_eq!(<Flat<Shape> as Layout>::ARITY, {});", arity)?;
    writeln!(f, "    assert_eq!(<Nested<Shape> as Layout>::ARITY, {});", arity)?;
    writeln!(f, "    assert_eq!(flat.size(), nested.size());")?;
    for (i, ty) in types.iter().enumerate() {
        writeln!(
            f,
            "    assert_type_eq_all!(ElementAt<Flat<Shape>, {i}>, ElementAt<Nested<Shape>, {i}>, {ty});",
            i = i,
            ty = ty
        )?;
        writeln!(
            f,
            "    assert_eq!(*flat.get::<{i}>(), *nested.get::<{i}>());",
            i = i
        )?;
        writeln!(f, "    *flat.get_mut::<{i}>() += 1;", i = i)?;
        writeln!(f, "    *nested.get_mut::<{i}>() += 1;", i = i)?;
    }
    writeln!(f, "    assert_eq!(flat.unpack_ref(), nested.unpack_ref());")?;
    writeln!(f, "    assert_eq!(flat.into_inner(), nested.into_inner());")?;
    writeln!(f, "}}")?;
    writeln!(f)?;
    Ok(())
}
