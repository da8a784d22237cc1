//! The `microbit` module as seen from the REPL.
//!
//! Only the object graph is modelled; calls that would touch the board
//! report that the hardware is missing. `random`, `sleep` and `running_time`
//! are pure software and work anywhere.

use std::{thread, time::Duration};

use rand::Rng;

use crate::{
    builtins::{expect_int, native},
    diagnostics::{Diagnostic, MicrohelpError, Result},
    runtime::CallContext,
    symbols::SymbolTable,
    value::{Arity, TypeObject, TypeRef, Value},
};

const PINS: &[u8] = &[0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 19, 20];

/// The installed module together with the types it defines.
pub struct Board {
    pub module: Value,
    pub types: Vec<TypeRef>,
}

pub fn install() -> Board {
    let display_type = board_type(
        "MicroBitDisplay",
        &[
            ("show", Arity::between(2, 3)),
            ("scroll", Arity::between(2, 3)),
            ("clear", Arity::exact(1)),
            ("animate", Arity::between(4, 7)),
            ("get_pixel", Arity::exact(3)),
            ("set_pixel", Arity::exact(4)),
        ],
    );
    let button_type = board_type("MicroBitButton", &[("is_pressed", Arity::exact(1))]);
    let accelerometer_type = board_type(
        "MicroBitAccelerometer",
        &[
            ("get_x", Arity::exact(1)),
            ("get_y", Arity::exact(1)),
            ("get_z", Arity::exact(1)),
        ],
    );
    let compass_type = board_type(
        "MicroBitCompass",
        &[
            ("is_calibrated", Arity::exact(1)),
            ("calibrate", Arity::exact(1)),
            ("is_calibrating", Arity::exact(1)),
            ("clear_calibration", Arity::exact(1)),
            ("get_x", Arity::exact(1)),
            ("get_y", Arity::exact(1)),
            ("get_z", Arity::exact(1)),
        ],
    );
    let pin_type = board_type(
        "MicroBitPin",
        &[
            ("write_digital", Arity::exact(2)),
            ("read_digital", Arity::exact(1)),
            ("write_analog", Arity::exact(2)),
            ("read_analog", Arity::exact(1)),
            ("is_touched", Arity::exact(1)),
        ],
    );
    let image_type = board_type(
        "MicroBitImage",
        &[
            ("width", Arity::exact(1)),
            ("height", Arity::exact(1)),
            ("get_pixel", Arity::exact(3)),
            ("set_pixel", Arity::exact(4)),
            ("shift_left", Arity::exact(2)),
            ("shift_right", Arity::exact(2)),
            ("shift_up", Arity::exact(2)),
            ("shift_down", Arity::exact(2)),
        ],
    );

    let mut globals = SymbolTable::new();
    globals.define("__name__", Value::str("microbit"));
    globals.define("Image", Value::ty(image_type.clone()));
    globals.define("display", Value::instance(display_type.clone()));
    globals.define("button_a", Value::instance(button_type.clone()));
    globals.define("button_b", Value::instance(button_type.clone()));
    globals.define("accelerometer", Value::instance(accelerometer_type.clone()));
    globals.define("compass", Value::instance(compass_type.clone()));
    for pin in PINS {
        globals.define(format!("pin{pin}"), Value::instance(pin_type.clone()));
    }
    globals.define("panic", native("panic", Arity::between(0, 1), hardware_unavailable));
    globals.define("random", native("random", Arity::exact(1), random));
    globals.define("sleep", native("sleep", Arity::exact(1), sleep));
    globals.define("running_time", native("running_time", Arity::exact(0), running_time));
    globals.define("reset", native("reset", Arity::exact(0), hardware_unavailable));

    Board {
        module: Value::module("microbit", globals),
        types: vec![
            display_type,
            button_type,
            accelerometer_type,
            compass_type,
            pin_type,
            image_type,
        ],
    }
}

fn board_type(name: &str, methods: &[(&'static str, Arity)]) -> TypeRef {
    let locals = methods
        .iter()
        .map(|&(method, arity)| (method, native(method, arity, hardware_unavailable)))
        .collect();
    TypeObject::plain(name, locals)
}

fn hardware_unavailable(_: &mut CallContext<'_>, _: &[Value]) -> Result<Value> {
    Err(MicrohelpError::from(
        Diagnostic::runtime("micro:bit hardware is not available on this host")
            .with_note("only `random`, `sleep` and `running_time` run without a board"),
    ))
}

fn random(_: &mut CallContext<'_>, args: &[Value]) -> Result<Value> {
    let bound = expect_int(&args[0], "microbit.random")?;
    if bound <= 0 {
        return Err(MicrohelpError::from(Diagnostic::runtime(
            "random bound must be positive",
        )));
    }
    Ok(Value::int(rand::thread_rng().gen_range(0..bound)))
}

fn sleep(_: &mut CallContext<'_>, args: &[Value]) -> Result<Value> {
    let millis = expect_int(&args[0], "microbit.sleep")?;
    if millis < 0 {
        return Err(MicrohelpError::from(Diagnostic::runtime(
            "sleep duration must be non-negative",
        )));
    }
    thread::sleep(Duration::from_millis(millis as u64));
    Ok(Value::none())
}

fn running_time(ctx: &mut CallContext<'_>, _: &[Value]) -> Result<Value> {
    Ok(Value::int(ctx.runtime.uptime_ms()))
}
