mod hsv;

pub use hsv::hsv_degrees_to_rgb;
use smart_leds::RGB8;

pub type Rgb = RGB8;
