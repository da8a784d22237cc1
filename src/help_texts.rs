//! Documentation strings. Every entry ends with a line break.

pub const WELCOME: &str = "Welcome to MicroPython on the BBC micro:bit!\n";

const SAY_HELLO: &str = "\
Type 'import microbit', press return.
Next, try this command:
  microbit.display.scroll('Hello')
";

const TRY_ME: &str = "\
  microbit.running_time()
  microbit.sleep(1000)
  microbit.button_a.is_pressed()
What do these commands do? Can you improve them? HINT: use the up and down
arrow keys to get your command history. Press the TAB key to auto-complete
unfinished words (so 'mi' becomes 'microbit' after you press TAB). These
tricks save a lot of typing and look cool!

";

const EXPLORE: &str = "\
Explore:
Type 'help(something)' to find out about it. Type 'dir(something)' to see what
it can do. For goodness sake, don't type 'import this'.

";

const STUFF: &str = "\
Stuff to explore:
  microbit.accelerometer         -- detect the device's position (orientation)
  microbit.button_a.is_pressed() -- is button A pressed? (True or False)
  microbit.button_b.is_pressed() -- is button B pressed? (True or False)
  microbit.compass               -- detect the device's heading
  microbit.display               -- display things (pixels, characters, words)
  microbit.Image                 -- make pictures for the display
  microbit.pin0                  -- control the gold input/output (IO) pin0
  microbit.panic()               -- enter panic mode (requires a restart)
  microbit.random(n)             -- get a random number between 0 and n-1
  microbit.reset()               -- reset the device
  microbit.sleep(n)              -- wait for n milliseconds (1 second = 1000)
  microbit.running_time()        -- get the number of milliseconds since reset

";

const CONTROL: &str = "\
Control commands:
  CTRL-C        -- stop a running program
  CTRL-D        -- on a blank line, do a soft reset of the micro:bit

";

const MODULES: &str = "\
Available modules: array, collections, microbit, micropython, gc, struct, sys,
this
";

const WEB: &str = "\
For more information about micro:bit, visit: http://www.microbit.co.uk
For more information about Python, visit: http://python.org/
To find out about MicroPython, visit: http://micropython.org/
";

/// The long-form welcome, printed in order.
pub const WELCOME_SECTIONS: &[&str] = &[
    WELCOME, SAY_HELLO, TRY_ME, EXPLORE, STUFF, CONTROL, MODULES, WEB,
];

pub const TYPE_DOCS: &[(&str, &str)] =
    &[("MicroBitAccelerometer", "MicroBitAccelerometer type\n")];

// Keep the wording consistent across entries and avoid jargon.
pub const VALUE_DOCS: &[(&str, &str)] = &[
    ("microbit", "Useful stuff to control the micro:bit hardware.\n"),
    // system state
    (
        "microbit.panic",
        "Put micro:bit in panic() mode and display an unhappy face.\n\
         Press reset button to exit panic() mode.\n",
    ),
    (
        "microbit.random",
        "Return a random(number) between 0 and 'number - 1'.\n\
         random(10) returns a number between 0 and 9.\n",
    ),
    (
        "microbit.sleep",
        "Put micro:bit to sleep(time) for some milliseconds (1 second = 1000 ms) of time.\n\
         sleep(2000) gives micro:bit a 2 second nap.\n",
    ),
    (
        "microbit.running_time",
        "Return running_time() in milliseconds since micro:bit's last reset.\n",
    ),
    // accelerometer
    (
        "microbit.accelerometer",
        "Detect micro:bit's movement in 3D.\n\
         It measures tilt (X and Y) and up-down (Z) motion.\n",
    ),
    (
        "microbit.accelerometer.get_x",
        "Return micro:bit's tilt (X acceleration) in milli-g's.\n",
    ),
    (
        "microbit.accelerometer.get_y",
        "Return micro:bit's tilt (Y acceleration) in milli-g's.\n",
    ),
    (
        "microbit.accelerometer.get_z",
        "Return micro:bit's up-down motion (Z acceleration) in milli-g's.\n\
         Z is a positive number when moving up. Moving down, Z is a negative number.\n",
    ),
    // buttons
    (
        "microbit.button_a",
        "micro:bit's 'A' button. When button is pressed down, is_pressed() is True.\n",
    ),
    (
        "microbit.button_b",
        "micro:bit's 'B' button. When button is pressed down, is_pressed() is True.\n",
    ),
    (
        "microbit.button_a.is_pressed",
        "If the button is pressed down, is_pressed() is True, else False.\n",
    ),
    // compass
    (
        "microbit.compass",
        "Use micro:bit's compass to detect the direction it is heading in.\n\
         The compass can detect magnetic fields.\n\
         It uses the Earth's magnetic field to detect direction.\n",
    ),
    (
        "microbit.compass.is_calibrated",
        "If micro:bit's compass is_calibrated() and adjusted for accuracy, return True.\n\
         If compass hasn't been adjusted for accuracy, return False.\n",
    ),
    (
        "microbit.compass.calibrate",
        "If micro:bit is confused, calibrate() the compass to adjust the its accuracy.\n",
    ),
    (
        "microbit.compass.is_calibrating",
        "If micro:bit's compass is_calibrating() its accuracy, it sends True.\n\
         If it's not busy calibrating things, it sends False.\n",
    ),
    (
        "microbit.compass.clear_calibration",
        "Reset micro:bit's compass using clear_calibration() command. \
         Run calibrate() to improve accuracy.\n",
    ),
    (
        "microbit.compass.get_x",
        "Return magnetic field detected along micro:bit's X axis.\n\
         Usually, the compass returns the earth's magnetic field in micro-Tesla units.\n\
         Unless...a strong magnet is nearby!\n",
    ),
    (
        "microbit.compass.get_y",
        "Return magnetic field detected along micro:bit's Y axis.\n\
         Usually, the compass returns the earth's magnetic field in micro-Tesla units.\n\
         Unless...a strong magnet is nearby!\n",
    ),
    (
        "microbit.compass.get_z",
        "Return magnetic field detected along micro:bit's Z axis.\n\
         Usually, the compass returns the earth's magnetic field in micro-Tesla units.\n\
         Unless...a strong magnet is nearby!\n",
    ),
    // display
    ("microbit.display", "micro:bit's 5x5 LED display.\n"),
    (
        "microbit.display.show",
        "Use show(s) to print the string 's' to the display. Try show('Hello!').\n\
         Use show(s, i) to show string 's', one character at a time with a delay of 'i' milliseconds.\n",
    ),
    (
        "microbit.display.scroll",
        "Use scroll(s) to scroll the string 's' across the display.\n\
         Use scroll(s, i) to scroll string 's' with a delay of 'i' milliseconds after each character.\n",
    ),
    ("microbit.display.clear", "Use clear() to clear micro:bit's display.\n"),
    (
        "microbit.display.animate",
        "Use animate(img, delay, stride, start=0, async=False, repeat=False) to animate\n    \
         image 'img' with 'delay' milliseconds and 'stride' pixels offset between\n    \
         frames. Optional: 'start' offset from left hand side, 'async' to run in the\n    \
         background, 'repeat' to loop the animation.\n",
    ),
    (
        "microbit.display.get_pixel",
        "Use get_brightness(x, y) to return the display's brightness at LED pixel (x,y).\n\
         Brightness can be from 0 (LED is off) to 9 (maximum LED brightness).\n",
    ),
    (
        "microbit.display.set_pixel",
        "Use set_brightness(x, y, b) to set the display at LED pixel (x,y) to brightness 'b'.\n\
         brightness 'b', which can be set between 0 (off) to 9 (full brightness).\n",
    ),
    // pins
    ("microbit.pin0", "micro:bit's pin 0 on the gold edge connector.\n"),
    ("microbit.pin1", "micro:bit's pin 1 on the gold edge connector.\n"),
    ("microbit.pin2", "micro:bit's pin 2 on the gold edge connector.\n"),
    ("microbit.pin3", "micro:bit's pin 3 on the gold edge connector.\n"),
    ("microbit.pin4", "micro:bit's pin 4 on the gold edge connector.\n"),
    ("microbit.pin5", "micro:bit's pin 5 on the gold edge connector.\n"),
    ("microbit.pin6", "micro:bit's pin 6 on the gold edge connector.\n"),
    ("microbit.pin7", "micro:bit's pin 7 on the gold edge connector.\n"),
    ("microbit.pin8", "micro:bit's pin 8 on the gold edge connector.\n"),
    ("microbit.pin9", "micro:bit's pin 9 on the gold edge connector.\n"),
    ("microbit.pin10", "micro:bit's pin 10 on the gold edge connector.\n"),
    ("microbit.pin11", "micro:bit's pin 11 on the gold edge connector.\n"),
    ("microbit.pin12", "micro:bit's pin 12 on the gold edge connector.\n"),
    ("microbit.pin13", "micro:bit's pin 13 on the gold edge connector.\n"),
    ("microbit.pin14", "micro:bit's pin 14 on the gold edge connector.\n"),
    ("microbit.pin15", "micro:bit's pin 15 on the gold edge connector.\n"),
    ("microbit.pin16", "micro:bit's pin 16 on the gold edge connector.\n"),
    ("microbit.pin19", "micro:bit's pin 19 on the gold edge connector.\n"),
    ("microbit.pin20", "micro:bit's pin 20 on the gold edge connector.\n"),
    (
        "microbit.pin0.write_digital",
        "micro:bit, write_digital(choice) to the pin. You have two 'choice' values, 0 (lo) or 1 (hi).\n",
    ),
    (
        "microbit.pin0.read_digital",
        "micro:bit, read_digital() value from the pin as either 0 (lo) or 1 (hi).\n",
    ),
    (
        "microbit.pin0.write_analog",
        "micro:bit, write_analog(value) to the pin. You can use a whole number between 0 and 255 as the value.\n",
    ),
    (
        "microbit.pin0.read_analog",
        "micro:bit, read_analog() value from the pin. Wow, analog has lots of values (0 - 65535). Digital has only 0 and 1.\n",
    ),
    (
        "microbit.pin0.is_touched",
        "If pin is_touched() on micro:bit, return True. If nothing is touching the pin, return False.\n",
    ),
];
