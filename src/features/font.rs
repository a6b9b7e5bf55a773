//! Size shorthands for the two most common font weights.

use adorn_core::{DecorationItem, Font};
use paste::paste;

use super::text::TextFeatures;

macro_rules! font_shorthands {
    ($($prefix:ident => $ctor:ident [$($size:literal)+]);+ $(;)?) => {
        paste! {
            /// One-call font shorthands: `r14()` reads as "regular 14",
            /// `s17()` as "semibold 17".
            pub trait FontShorthands: TextFeatures {
                $($(
                    #[doc = concat!("Sets a ", stringify!($ctor), " system font of size ", stringify!($size), ".")]
                    #[must_use]
                    fn [<$prefix $size>](&self) -> DecorationItem {
                        self.font(Font::$ctor($size as f32))
                    }
                )+)+
            }

            impl FontShorthands for DecorationItem {}
        }
    };
}

font_shorthands! {
    r => regular [10 11 12 13 14 15 16 17 18 19 20 21 22 23 24 25 26 27 28];
    s => semibold [10 11 12 13 14 15 16 17 18 19 20 21 22 23 24 25 26 27 28];
}
