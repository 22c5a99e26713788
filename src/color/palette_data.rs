//! 内置硬件调色板数据
//! NES 2C02 (NTSC) 常用近似值

use super::palette::{HardwarePalette, Rgb8};

/// 默认硬件调色板 (64 色)
pub const DEFAULT_PALETTE: HardwarePalette = HardwarePalette::new([
    // $00-$0F
    Rgb8 { r: 102, g: 102, b: 102 }, // 0x00  #666666
    Rgb8 { r: 0,   g: 42,  b: 136 }, // 0x01  #002A88
    Rgb8 { r: 20,  g: 18,  b: 167 }, // 0x02  #1412A7
    Rgb8 { r: 59,  g: 0,   b: 164 }, // 0x03  #3B00A4
    Rgb8 { r: 92,  g: 0,   b: 126 }, // 0x04  #5C007E
    Rgb8 { r: 110, g: 0,   b: 64  }, // 0x05  #6E0040
    Rgb8 { r: 108, g: 6,   b: 0   }, // 0x06  #6C0600
    Rgb8 { r: 86,  g: 29,  b: 0   }, // 0x07  #561D00
    Rgb8 { r: 51,  g: 53,  b: 0   }, // 0x08  #333500
    Rgb8 { r: 11,  g: 72,  b: 0   }, // 0x09  #0B4800
    Rgb8 { r: 0,   g: 82,  b: 0   }, // 0x0A  #005200
    Rgb8 { r: 0,   g: 79,  b: 8   }, // 0x0B  #004F08
    Rgb8 { r: 0,   g: 64,  b: 77  }, // 0x0C  #00404D
    Rgb8 { r: 0,   g: 0,   b: 0   }, // 0x0D  #000000
    Rgb8 { r: 0,   g: 0,   b: 0   }, // 0x0E  #000000
    Rgb8 { r: 0,   g: 0,   b: 0   }, // 0x0F  #000000
    // $10-$1F
    Rgb8 { r: 173, g: 173, b: 173 }, // 0x10  #ADADAD
    Rgb8 { r: 21,  g: 95,  b: 217 }, // 0x11  #155FD9
    Rgb8 { r: 66,  g: 64,  b: 255 }, // 0x12  #4240FF
    Rgb8 { r: 117, g: 39,  b: 254 }, // 0x13  #7527FE
    Rgb8 { r: 160, g: 26,  b: 204 }, // 0x14  #A01ACC
    Rgb8 { r: 183, g: 30,  b: 123 }, // 0x15  #B71E7B
    Rgb8 { r: 181, g: 49,  b: 32  }, // 0x16  #B53120
    Rgb8 { r: 153, g: 78,  b: 0   }, // 0x17  #994E00
    Rgb8 { r: 107, g: 109, b: 0   }, // 0x18  #6B6D00
    Rgb8 { r: 56,  g: 135, b: 0   }, // 0x19  #388700
    Rgb8 { r: 12,  g: 147, b: 0   }, // 0x1A  #0C9300
    Rgb8 { r: 0,   g: 143, b: 50  }, // 0x1B  #008F32
    Rgb8 { r: 0,   g: 124, b: 141 }, // 0x1C  #007C8D
    Rgb8 { r: 0,   g: 0,   b: 0   }, // 0x1D  #000000
    Rgb8 { r: 0,   g: 0,   b: 0   }, // 0x1E  #000000
    Rgb8 { r: 0,   g: 0,   b: 0   }, // 0x1F  #000000
    // $20-$2F
    Rgb8 { r: 255, g: 254, b: 255 }, // 0x20  #FFFEFF
    Rgb8 { r: 100, g: 176, b: 255 }, // 0x21  #64B0FF
    Rgb8 { r: 146, g: 144, b: 255 }, // 0x22  #9290FF
    Rgb8 { r: 198, g: 118, b: 255 }, // 0x23  #C676FF
    Rgb8 { r: 243, g: 106, b: 255 }, // 0x24  #F36AFF
    Rgb8 { r: 254, g: 110, b: 204 }, // 0x25  #FE6ECC
    Rgb8 { r: 254, g: 129, b: 112 }, // 0x26  #FE8170
    Rgb8 { r: 234, g: 158, b: 34  }, // 0x27  #EA9E22
    Rgb8 { r: 188, g: 190, b: 0   }, // 0x28  #BCBE00
    Rgb8 { r: 136, g: 216, b: 0   }, // 0x29  #88D800
    Rgb8 { r: 92,  g: 228, b: 48  }, // 0x2A  #5CE430
    Rgb8 { r: 69,  g: 224, b: 130 }, // 0x2B  #45E082
    Rgb8 { r: 72,  g: 205, b: 222 }, // 0x2C  #48CDDE
    Rgb8 { r: 79,  g: 79,  b: 79  }, // 0x2D  #4F4F4F
    Rgb8 { r: 0,   g: 0,   b: 0   }, // 0x2E  #000000
    Rgb8 { r: 0,   g: 0,   b: 0   }, // 0x2F  #000000
    // $30-$3F
    Rgb8 { r: 255, g: 254, b: 255 }, // 0x30  #FFFEFF
    Rgb8 { r: 192, g: 223, b: 255 }, // 0x31  #C0DFFF
    Rgb8 { r: 211, g: 210, b: 255 }, // 0x32  #D3D2FF
    Rgb8 { r: 232, g: 200, b: 255 }, // 0x33  #E8C8FF
    Rgb8 { r: 251, g: 194, b: 255 }, // 0x34  #FBC2FF
    Rgb8 { r: 254, g: 196, b: 234 }, // 0x35  #FEC4EA
    Rgb8 { r: 254, g: 204, b: 197 }, // 0x36  #FECCC5
    Rgb8 { r: 247, g: 216, b: 165 }, // 0x37  #F7D8A5
    Rgb8 { r: 228, g: 229, b: 148 }, // 0x38  #E4E594
    Rgb8 { r: 207, g: 239, b: 150 }, // 0x39  #CFEF96
    Rgb8 { r: 189, g: 244, b: 171 }, // 0x3A  #BDF4AB
    Rgb8 { r: 179, g: 243, b: 204 }, // 0x3B  #B3F3CC
    Rgb8 { r: 181, g: 235, b: 242 }, // 0x3C  #B5EBF2
    Rgb8 { r: 184, g: 184, b: 184 }, // 0x3D  #B8B8B8
    Rgb8 { r: 0,   g: 0,   b: 0   }, // 0x3E  #000000
    Rgb8 { r: 0,   g: 0,   b: 0   }, // 0x3F  #000000
]);
