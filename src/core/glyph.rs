use crate::error::{RenderError, RenderResult};

/// A Font Awesome glyph, identified by catalog name and numeric id.
///
/// Names are stored exactly as catalogued. A few carry underscore padding so
/// they do not collide with reserved words (`try_`, `_500px`); the padding is
/// never emitted because [`Glyph::css_name`] strips it and maps internal
/// underscores to hyphens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Glyph {
    raw: &'static str,
    id: u16,
}

impl Glyph {
    /// Looks up a glyph by catalog name.
    ///
    /// Accepts both the catalog spelling (`hand_paper_o`) and the normalized
    /// CSS spelling (`hand-paper-o`).
    pub fn named(name: &str) -> RenderResult<Self> {
        if let Some(glyph) = CATALOG.iter().find(|glyph| glyph.raw == name) {
            return Ok(*glyph);
        }

        let normalized = normalize_glyph_name(name);
        CATALOG
            .iter()
            .find(|glyph| glyph.css_name() == normalized)
            .copied()
            .ok_or_else(|| RenderError::UnknownGlyph(name.to_owned()))
    }

    /// Looks up a glyph by its numeric catalog id.
    pub fn from_id(id: u16) -> RenderResult<Self> {
        CATALOG
            .iter()
            .find(|glyph| glyph.id == id)
            .copied()
            .ok_or(RenderError::UnknownGlyphId(id))
    }

    /// The catalog spelling, underscore padding included.
    #[must_use]
    pub fn raw_name(self) -> &'static str {
        self.raw
    }

    #[must_use]
    pub fn id(self) -> u16 {
        self.id
    }

    /// The spelling embedded in CSS class tokens (`fa-{css_name}`).
    #[must_use]
    pub fn css_name(self) -> String {
        normalize_glyph_name(self.raw)
    }
}

/// Trims `_` padding and maps internal underscores to hyphens.
///
/// Idempotent: normalizing an already-normalized name returns it unchanged.
#[must_use]
pub fn normalize_glyph_name(name: &str) -> String {
    name.trim_matches('_').replace('_', "-")
}

macro_rules! glyph_catalog {
    ($($const_name:ident => $raw:literal = $id:literal,)+) => {
        impl Glyph {
            $(
                pub const $const_name: Glyph = Glyph { raw: $raw, id: $id };
            )+
        }

        const CATALOG: &[Glyph] = &[$(Glyph::$const_name),+];
    };
}

glyph_catalog! {
    ADJUST => "adjust" = 21,
    ANCHOR => "anchor" = 22,
    ARCHIVE => "archive" = 23,
    AREA_CHART => "area_chart" = 24,
    ARROWS => "arrows" = 25,
    ARROWS_H => "arrows_h" = 26,
    ARROWS_V => "arrows_v" = 27,
    ASTERISK => "asterisk" = 28,
    AT => "at" = 29,
    AUTOMOBILE => "automobile" = 30,
    BALANCE_SCALE => "balance_scale" = 31,
    BAN => "ban" = 32,
    BANK => "bank" = 33,
    BAR_CHART => "bar_chart" = 34,
    BAR_CHART_O => "bar_chart_o" = 35,
    BARCODE => "barcode" = 36,
    BARS => "bars" = 37,
    BATTERY_0 => "battery_0" = 38,
    BATTERY_1 => "battery_1" = 39,
    BATTERY_2 => "battery_2" = 40,
    BATTERY_3 => "battery_3" = 41,
    BATTERY_4 => "battery_4" = 42,
    BATTERY_EMPTY => "battery_empty" = 43,
    BATTERY_FULL => "battery_full" = 44,
    BATTERY_HALF => "battery_half" = 45,
    BATTERY_QUARTER => "battery_quarter" = 46,
    BATTERY_THREE_QUARTERS => "battery_three_quarters" = 47,
    BED => "bed" = 48,
    BEER => "beer" = 49,
    BELL => "bell" = 50,
    BELL_O => "bell_o" = 51,
    BELL_SLASH => "bell_slash" = 52,
    BELL_SLASH_O => "bell_slash_o" = 53,
    BICYCLE => "bicycle" = 54,
    BINOCULARS => "binoculars" = 55,
    BIRTHDAY_CAKE => "birthday_cake" = 56,
    BLUETOOTH => "bluetooth" = 57,
    BLUETOOTH_B => "bluetooth_b" = 58,
    BOLT => "bolt" = 59,
    BOMB => "bomb" = 60,
    BOOK => "book" = 61,
    BOOKMARK => "bookmark" = 62,
    BOOKMARK_O => "bookmark_o" = 63,
    BRIEFCASE => "briefcase" = 64,
    BUG => "bug" = 65,
    BUILDING => "building" = 66,
    BUILDING_O => "building_o" = 67,
    BULLHORN => "bullhorn" = 68,
    BULLSEYE => "bullseye" = 69,
    BUS => "bus" = 70,
    CAB => "cab" = 71,
    CALCULATOR => "calculator" = 72,
    CALENDAR => "calendar" = 73,
    CALENDAR_CHECK_O => "calendar_check_o" = 74,
    CALENDAR_MINUS_O => "calendar_minus_o" = 75,
    CALENDAR_O => "calendar_o" = 76,
    CALENDAR_PLUS_O => "calendar_plus_o" = 77,
    CALENDAR_TIMES_O => "calendar_times_o" = 78,
    CAMERA => "camera" = 79,
    CAMERA_RETRO => "camera_retro" = 80,
    CAR => "car" = 81,
    CARET_SQUARE_O_DOWN => "caret_square_o_down" = 82,
    CARET_SQUARE_O_LEFT => "caret_square_o_left" = 83,
    CARET_SQUARE_O_RIGHT => "caret_square_o_right" = 84,
    CARET_SQUARE_O_UP => "caret_square_o_up" = 85,
    CART_ARROW_DOWN => "cart_arrow_down" = 86,
    CART_PLUS => "cart_plus" = 87,
    CC => "cc" = 88,
    CERTIFICATE => "certificate" = 89,
    CHECK => "check" = 90,
    CHECK_CIRCLE => "check_circle" = 91,
    CHECK_CIRCLE_O => "check_circle_o" = 92,
    CHECK_SQUARE => "check_square" = 93,
    CHECK_SQUARE_O => "check_square_o" = 94,
    CHILD => "child" = 95,
    CIRCLE => "circle" = 96,
    CIRCLE_O => "circle_o" = 97,
    CIRCLE_O_NOTCH => "circle_o_notch" = 98,
    CIRCLE_THIN => "circle_thin" = 99,
    CLOCK_O => "clock_o" = 100,
    CLONE => "clone" = 101,
    CLOSE => "close" = 102,
    CLOUD => "cloud" = 103,
    CLOUD_DOWNLOAD => "cloud_download" = 104,
    CLOUD_UPLOAD => "cloud_upload" = 105,
    CODE => "code" = 106,
    CODE_FORK => "code_fork" = 107,
    COFFEE => "coffee" = 108,
    COG => "cog" = 109,
    COGS => "cogs" = 110,
    COMMENT => "comment" = 111,
    COMMENT_O => "comment_o" = 112,
    COMMENTING => "commenting" = 113,
    COMMENTING_O => "commenting_o" = 114,
    COMMENTS => "comments" = 115,
    COMMENTS_O => "comments_o" = 116,
    COMPASS => "compass" = 117,
    COPYRIGHT => "copyright" = 118,
    CREATIVE_COMMONS => "creative_commons" = 119,
    CREDIT_CARD => "credit_card" = 120,
    CREDIT_CARD_ALT => "credit_card_alt" = 121,
    CROP => "crop" = 122,
    CROSSHAIRS => "crosshairs" = 123,
    CUBE => "cube" = 124,
    CUBES => "cubes" = 125,
    CUTLERY => "cutlery" = 126,
    DASHBOARD => "dashboard" = 127,
    DATABASE => "database" = 128,
    DESKTOP => "desktop" = 129,
    DIAMOND => "diamond" = 130,
    DOT_CIRCLE_O => "dot_circle_o" = 131,
    DOWNLOAD => "download" = 132,
    EDIT => "edit" = 133,
    ELLIPSIS_H => "ellipsis_h" = 134,
    ELLIPSIS_V => "ellipsis_v" = 135,
    ENVELOPE => "envelope" = 136,
    ENVELOPE_O => "envelope_o" = 137,
    ENVELOPE_SQUARE => "envelope_square" = 138,
    ERASER => "eraser" = 139,
    EXCHANGE => "exchange" = 140,
    EXCLAMATION => "exclamation" = 141,
    EXCLAMATION_CIRCLE => "exclamation_circle" = 142,
    EXCLAMATION_TRIANGLE => "exclamation_triangle" = 143,
    EXTERNAL_LINK => "external_link" = 144,
    EXTERNAL_LINK_SQUARE => "external_link_square" = 145,
    EYE => "eye" = 146,
    EYE_SLASH => "eye_slash" = 147,
    EYEDROPPER => "eyedropper" = 148,
    FAX => "fax" = 149,
    FEED => "feed" = 150,
    FEMALE => "female" = 151,
    FIGHTER_JET => "fighter_jet" = 152,
    FILE_ARCHIVE_O => "file_archive_o" = 153,
    FILE_AUDIO_O => "file_audio_o" = 154,
    FILE_CODE_O => "file_code_o" = 155,
    FILE_EXCEL_O => "file_excel_o" = 156,
    FILE_IMAGE_O => "file_image_o" = 157,
    FILE_MOVIE_O => "file_movie_o" = 158,
    FILE_PDF_O => "file_pdf_o" = 159,
    FILE_PHOTO_O => "file_photo_o" = 160,
    FILE_PICTURE_O => "file_picture_o" = 161,
    FILE_POWERPOINT_O => "file_powerpoint_o" = 162,
    FILE_SOUND_O => "file_sound_o" = 163,
    FILE_VIDEO_O => "file_video_o" = 164,
    FILE_WORD_O => "file_word_o" = 165,
    FILE_ZIP_O => "file_zip_o" = 166,
    FILM => "film" = 167,
    FILTER => "filter" = 168,
    FIRE => "fire" = 169,
    FIRE_EXTINGUISHER => "fire_extinguisher" = 170,
    FLAG => "flag" = 171,
    FLAG_CHECKERED => "flag_checkered" = 172,
    FLAG_O => "flag_o" = 173,
    FLASH => "flash" = 174,
    FLASK => "flask" = 175,
    FOLDER => "folder" = 176,
    FOLDER_O => "folder_o" = 177,
    FOLDER_OPEN => "folder_open" = 178,
    FOLDER_OPEN_O => "folder_open_o" = 179,
    FROWN_O => "frown_o" = 180,
    FUTBOL_O => "futbol_o" = 181,
    GAMEPAD => "gamepad" = 182,
    GAVEL => "gavel" = 183,
    GEAR => "gear" = 184,
    GEARS => "gears" = 185,
    GIFT => "gift" = 186,
    GLASS => "glass" = 187,
    GLOBE => "globe" = 188,
    GRADUATION_CAP => "graduation_cap" = 189,
    GROUP => "group" = 190,
    HAND_GRAB_O => "hand_grab_o" = 191,
    HAND_LIZARD_O => "hand_lizard_o" = 192,
    HAND_PAPER_O => "hand_paper_o" = 193,
    HAND_PEACE_O => "hand_peace_o" = 194,
    HAND_POINTER_O => "hand_pointer_o" = 195,
    HAND_ROCK_O => "hand_rock_o" = 196,
    HAND_SCISSORS_O => "hand_scissors_o" = 197,
    HAND_SPOCK_O => "hand_spock_o" = 198,
    HAND_STOP_O => "hand_stop_o" = 199,
    HASHTAG => "hashtag" = 200,
    HDD_O => "hdd_o" = 201,
    HEADPHONES => "headphones" = 202,
    HEART => "heart" = 203,
    HEART_O => "heart_o" = 204,
    HEARTBEAT => "heartbeat" = 205,
    HISTORY => "history" = 206,
    HOME => "home" = 207,
    HOTEL => "hotel" = 208,
    HOURGLASS => "hourglass" = 209,
    HOURGLASS_1 => "hourglass_1" = 210,
    HOURGLASS_2 => "hourglass_2" = 211,
    HOURGLASS_3 => "hourglass_3" = 212,
    HOURGLASS_END => "hourglass_end" = 213,
    HOURGLASS_HALF => "hourglass_half" = 214,
    HOURGLASS_O => "hourglass_o" = 215,
    HOURGLASS_START => "hourglass_start" = 216,
    I_CURSOR => "i_cursor" = 217,
    IMAGE => "image" = 218,
    INBOX => "inbox" = 219,
    INDUSTRY => "industry" = 220,
    INFO => "info" = 221,
    INFO_CIRCLE => "info_circle" = 222,
    INSTITUTION => "institution" = 223,
    KEY => "key" = 224,
    KEYBOARD_O => "keyboard_o" = 225,
    LANGUAGE => "language" = 226,
    LAPTOP => "laptop" = 227,
    LEAF => "leaf" = 228,
    LEGAL => "legal" = 229,
    LEMON_O => "lemon_o" = 230,
    LEVEL_DOWN => "level_down" = 231,
    LEVEL_UP => "level_up" = 232,
    LIFE_BOUY => "life_bouy" = 233,
    LIFE_BUOY => "life_buoy" = 234,
    LIFE_RING => "life_ring" = 235,
    LIFE_SAVER => "life_saver" = 236,
    LIGHTBULB_O => "lightbulb_o" = 237,
    LINE_CHART => "line_chart" = 238,
    LOCATION_ARROW => "location_arrow" = 239,
    LOCK => "lock" = 240,
    MAGIC => "magic" = 241,
    MAGNET => "magnet" = 242,
    MAIL_FORWARD => "mail_forward" = 243,
    MAIL_REPLY => "mail_reply" = 244,
    MAIL_REPLY_ALL => "mail_reply_all" = 245,
    MALE => "male" = 246,
    MAP => "map" = 247,
    MAP_MARKER => "map_marker" = 248,
    MAP_O => "map_o" = 249,
    MAP_PIN => "map_pin" = 250,
    MAP_SIGNS => "map_signs" = 251,
    MEH_O => "meh_o" = 252,
    MICROPHONE => "microphone" = 253,
    MICROPHONE_SLASH => "microphone_slash" = 254,
    MINUS => "minus" = 255,
    MINUS_CIRCLE => "minus_circle" = 256,
    MINUS_SQUARE => "minus_square" = 257,
    MINUS_SQUARE_O => "minus_square_o" = 258,
    MOBILE => "mobile" = 259,
    MOBILE_PHONE => "mobile_phone" = 260,
    MONEY => "money" = 261,
    MOON_O => "moon_o" = 262,
    MORTAR_BOARD => "mortar_board" = 263,
    MOTORCYCLE => "motorcycle" = 264,
    MOUSE_POINTER => "mouse_pointer" = 265,
    MUSIC => "music" = 266,
    NAVICON => "navicon" = 267,
    NEWSPAPER_O => "newspaper_o" = 268,
    OBJECT_GROUP => "object_group" = 269,
    OBJECT_UNGROUP => "object_ungroup" = 270,
    PAINT_BRUSH => "paint_brush" = 271,
    PAPER_PLANE => "paper_plane" = 272,
    PAPER_PLANE_O => "paper_plane_o" = 273,
    PAW => "paw" = 274,
    PENCIL => "pencil" = 275,
    PENCIL_SQUARE => "pencil_square" = 276,
    PENCIL_SQUARE_O => "pencil_square_o" = 277,
    PERCENT => "percent" = 278,
    PHONE => "phone" = 279,
    PHONE_SQUARE => "phone_square" = 280,
    PHOTO => "photo" = 281,
    PICTURE_O => "picture_o" = 282,
    PIE_CHART => "pie_chart" = 283,
    PLANE => "plane" = 284,
    PLUG => "plug" = 285,
    PLUS => "plus" = 286,
    PLUS_CIRCLE => "plus_circle" = 287,
    PLUS_SQUARE => "plus_square" = 288,
    PLUS_SQUARE_O => "plus_square_o" = 289,
    POWER_OFF => "power_off" = 290,
    PRINT => "print" = 291,
    PUZZLE_PIECE => "puzzle_piece" = 292,
    QRCODE => "qrcode" = 293,
    QUESTION => "question" = 294,
    QUESTION_CIRCLE => "question_circle" = 295,
    QUOTE_LEFT => "quote_left" = 296,
    QUOTE_RIGHT => "quote_right" = 297,
    RANDOM => "random" = 298,
    RECYCLE => "recycle" = 299,
    REFRESH => "refresh" = 300,
    REGISTERED => "registered" = 301,
    REMOVE => "remove" = 302,
    REORDER => "reorder" = 303,
    REPLY => "reply" = 304,
    REPLY_ALL => "reply_all" = 305,
    RETWEET => "retweet" = 306,
    ROAD => "road" = 307,
    ROCKET => "rocket" = 308,
    RSS => "rss" = 309,
    RSS_SQUARE => "rss_square" = 310,
    SEARCH => "search" = 311,
    SEARCH_MINUS => "search_minus" = 312,
    SEARCH_PLUS => "search_plus" = 313,
    SEND => "send" = 314,
    SEND_O => "send_o" = 315,
    SERVER => "server" = 316,
    SHARE => "share" = 317,
    SHARE_ALT => "share_alt" = 318,
    SHARE_ALT_SQUARE => "share_alt_square" = 319,
    SHARE_SQUARE => "share_square" = 320,
    SHARE_SQUARE_O => "share_square_o" = 321,
    SHIELD => "shield" = 322,
    SHIP => "ship" = 323,
    SHOPPING_BAG => "shopping_bag" = 324,
    SHOPPING_BASKET => "shopping_basket" = 325,
    SHOPPING_CART => "shopping_cart" = 326,
    SIGN_IN => "sign_in" = 327,
    SIGN_OUT => "sign_out" = 328,
    SIGNAL => "signal" = 329,
    SITEMAP => "sitemap" = 330,
    SLIDERS => "sliders" = 331,
    SMILE_O => "smile_o" = 332,
    SOCCER_BALL_O => "soccer_ball_o" = 333,
    SORT => "sort" = 334,
    SORT_ALPHA_ASC => "sort_alpha_asc" = 335,
    SORT_ALPHA_DESC => "sort_alpha_desc" = 336,
    SORT_AMOUNT_ASC => "sort_amount_asc" = 337,
    SORT_AMOUNT_DESC => "sort_amount_desc" = 338,
    SORT_ASC => "sort_asc" = 339,
    SORT_DESC => "sort_desc" = 340,
    SORT_DOWN => "sort_down" = 341,
    SORT_NUMERIC_ASC => "sort_numeric_asc" = 342,
    SORT_NUMERIC_DESC => "sort_numeric_desc" = 343,
    SORT_UP => "sort_up" = 344,
    SPACE_SHUTTLE => "space_shuttle" = 345,
    SPINNER => "spinner" = 346,
    SPOON => "spoon" = 347,
    SQUARE => "square" = 348,
    SQUARE_O => "square_o" = 349,
    STAR => "star" = 350,
    STAR_HALF => "star_half" = 351,
    STAR_HALF_EMPTY => "star_half_empty" = 352,
    STAR_HALF_FULL => "star_half_full" = 353,
    STAR_HALF_O => "star_half_o" = 354,
    STAR_O => "star_o" = 355,
    STICKY_NOTE => "sticky_note" = 356,
    STICKY_NOTE_O => "sticky_note_o" = 357,
    STREET_VIEW => "street_view" = 358,
    SUITCASE => "suitcase" = 359,
    SUN_O => "sun_o" = 360,
    SUPPORT => "support" = 361,
    TABLET => "tablet" = 362,
    TACHOMETER => "tachometer" = 363,
    TAG => "tag" = 364,
    TAGS => "tags" = 365,
    TASKS => "tasks" = 366,
    TAXI => "taxi" = 367,
    TELEVISION => "television" = 368,
    TERMINAL => "terminal" = 369,
    THUMB_TACK => "thumb_tack" = 370,
    THUMBS_DOWN => "thumbs_down" = 371,
    THUMBS_O_DOWN => "thumbs_o_down" = 372,
    THUMBS_O_UP => "thumbs_o_up" = 373,
    THUMBS_UP => "thumbs_up" = 374,
    TICKET => "ticket" = 375,
    TIMES => "times" = 376,
    TIMES_CIRCLE => "times_circle" = 377,
    TIMES_CIRCLE_O => "times_circle_o" = 378,
    TINT => "tint" = 379,
    TOGGLE_DOWN => "toggle_down" = 380,
    TOGGLE_LEFT => "toggle_left" = 381,
    TOGGLE_OFF => "toggle_off" = 382,
    TOGGLE_ON => "toggle_on" = 383,
    TOGGLE_RIGHT => "toggle_right" = 384,
    TOGGLE_UP => "toggle_up" = 385,
    TRADEMARK => "trademark" = 386,
    TRASH => "trash" = 387,
    TRASH_O => "trash_o" = 388,
    TREE => "tree" = 389,
    TROPHY => "trophy" = 390,
    TRUCK => "truck" = 391,
    TTY => "tty" = 392,
    TV => "tv" = 393,
    UMBRELLA => "umbrella" = 394,
    UNIVERSITY => "university" = 395,
    UNLOCK => "unlock" = 396,
    UNLOCK_ALT => "unlock_alt" = 397,
    UNSORTED => "unsorted" = 398,
    UPLOAD => "upload" = 399,
    USER => "user" = 400,
    USER_PLUS => "user_plus" = 401,
    USER_SECRET => "user_secret" = 402,
    USER_TIMES => "user_times" = 403,
    USERS => "users" = 404,
    VIDEO_CAMERA => "video_camera" = 405,
    VOLUME_DOWN => "volume_down" = 406,
    VOLUME_OFF => "volume_off" = 407,
    VOLUME_UP => "volume_up" = 408,
    WARNING => "warning" = 409,
    WHEELCHAIR => "wheelchair" = 410,
    WIFI => "wifi" = 411,
    WRENCH => "wrench" = 412,
    HAND_O_DOWN => "hand_o_down" = 415,
    HAND_O_LEFT => "hand_o_left" = 416,
    HAND_O_RIGHT => "hand_o_right" = 417,
    HAND_O_UP => "hand_o_up" = 418,
    AMBULANCE => "ambulance" = 430,
    SUBWAY => "subway" = 442,
    TRAIN => "train" = 444,
    GENDERLESS => "genderless" = 447,
    INTERSEX => "intersex" = 448,
    MARS => "mars" = 449,
    MARS_DOUBLE => "mars_double" = 450,
    MARS_STROKE => "mars_stroke" = 451,
    MARS_STROKE_H => "mars_stroke_h" = 452,
    MARS_STROKE_V => "mars_stroke_v" = 453,
    MERCURY => "mercury" = 454,
    NEUTER => "neuter" = 455,
    TRANSGENDER => "transgender" = 456,
    TRANSGENDER_ALT => "transgender_alt" = 457,
    VENUS => "venus" = 458,
    VENUS_DOUBLE => "venus_double" = 459,
    VENUS_MARS => "venus_mars" = 460,
    FILE => "file" = 461,
    FILE_O => "file_o" = 468,
    FILE_TEXT => "file_text" = 474,
    FILE_TEXT_O => "file_text_o" = 475,
    CC_AMEX => "cc_amex" = 495,
    CC_DINERS_CLUB => "cc_diners_club" = 496,
    CC_DISCOVER => "cc_discover" = 497,
    CC_JCB => "cc_jcb" = 498,
    CC_MASTERCARD => "cc_mastercard" = 499,
    CC_PAYPAL => "cc_paypal" = 500,
    CC_STRIPE => "cc_stripe" = 501,
    CC_VISA => "cc_visa" = 502,
    GOOGLE_WALLET => "google_wallet" = 505,
    PAYPAL => "paypal" = 506,
    BITCOIN => "bitcoin" = 512,
    BTC => "btc" = 513,
    CNY => "cny" = 514,
    DOLLAR => "dollar" = 515,
    EUR => "eur" = 516,
    EURO => "euro" = 517,
    GBP => "gbp" = 518,
    GG => "gg" = 519,
    GG_CIRCLE => "gg_circle" = 520,
    ILS => "ils" = 521,
    INR => "inr" = 522,
    JPY => "jpy" = 523,
    KRW => "krw" = 524,
    RMB => "rmb" = 526,
    ROUBLE => "rouble" = 527,
    RUB => "rub" = 528,
    RUBLE => "ruble" = 529,
    RUPEE => "rupee" = 530,
    SHEKEL => "shekel" = 531,
    SHEQEL => "sheqel" = 532,
    TRY_ => "try_" = 533,
    TURKISH_LIRA => "turkish_lira" = 534,
    USD => "usd" = 535,
    WON => "won" = 536,
    YEN => "yen" = 537,
    ALIGN_CENTER => "align_center" = 538,
    ALIGN_JUSTIFY => "align_justify" = 539,
    ALIGN_LEFT => "align_left" = 540,
    ALIGN_RIGHT => "align_right" = 541,
    BOLD => "bold" = 542,
    CHAIN => "chain" = 543,
    CHAIN_BROKEN => "chain_broken" = 544,
    CLIPBOARD => "clipboard" = 545,
    COLUMNS => "columns" = 546,
    COPY => "copy" = 547,
    CUT => "cut" = 548,
    DEDENT => "dedent" = 549,
    FILES_O => "files_o" = 555,
    FLOPPY_O => "floppy_o" = 556,
    FONT => "font" = 557,
    HEADER => "header" = 558,
    INDENT => "indent" = 559,
    ITALIC => "italic" = 560,
    LINK => "link" = 561,
    LIST => "list" = 562,
    LIST_ALT => "list_alt" = 563,
    LIST_OL => "list_ol" = 564,
    LIST_UL => "list_ul" = 565,
    OUTDENT => "outdent" = 566,
    PAPERCLIP => "paperclip" = 567,
    PARAGRAPH => "paragraph" = 568,
    PASTE => "paste" = 569,
    REPEAT => "repeat" = 570,
    ROTATE_LEFT => "rotate_left" = 571,
    ROTATE_RIGHT => "rotate_right" = 572,
    SAVE => "save" = 573,
    SCISSORS => "scissors" = 574,
    STRIKETHROUGH => "strikethrough" = 575,
    SUBSCRIPT => "subscript" = 576,
    SUPERSCRIPT => "superscript" = 577,
    TABLE => "table" = 578,
    TEXT_HEIGHT => "text_height" = 579,
    TEXT_WIDTH => "text_width" = 580,
    TH => "th" = 581,
    TH_LARGE => "th_large" = 582,
    TH_LIST => "th_list" = 583,
    UNDERLINE => "underline" = 584,
    UNDO => "undo" = 585,
    UNLINK => "unlink" = 586,
    ANGLE_DOUBLE_DOWN => "angle_double_down" = 587,
    ANGLE_DOUBLE_LEFT => "angle_double_left" = 588,
    ANGLE_DOUBLE_RIGHT => "angle_double_right" = 589,
    ANGLE_DOUBLE_UP => "angle_double_up" = 590,
    ANGLE_DOWN => "angle_down" = 591,
    ANGLE_LEFT => "angle_left" = 592,
    ANGLE_RIGHT => "angle_right" = 593,
    ANGLE_UP => "angle_up" = 594,
    ARROW_CIRCLE_DOWN => "arrow_circle_down" = 595,
    ARROW_CIRCLE_LEFT => "arrow_circle_left" = 596,
    ARROW_CIRCLE_O_DOWN => "arrow_circle_o_down" = 597,
    ARROW_CIRCLE_O_LEFT => "arrow_circle_o_left" = 598,
    ARROW_CIRCLE_O_RIGHT => "arrow_circle_o_right" = 599,
    ARROW_CIRCLE_O_UP => "arrow_circle_o_up" = 600,
    ARROW_CIRCLE_RIGHT => "arrow_circle_right" = 601,
    ARROW_CIRCLE_UP => "arrow_circle_up" = 602,
    ARROW_DOWN => "arrow_down" = 603,
    ARROW_LEFT => "arrow_left" = 604,
    ARROW_RIGHT => "arrow_right" = 605,
    ARROW_UP => "arrow_up" = 606,
    ARROWS_ALT => "arrows_alt" = 608,
    CARET_DOWN => "caret_down" = 611,
    CARET_LEFT => "caret_left" = 612,
    CARET_RIGHT => "caret_right" = 613,
    CARET_UP => "caret_up" = 618,
    CHEVRON_CIRCLE_DOWN => "chevron_circle_down" = 619,
    CHEVRON_CIRCLE_LEFT => "chevron_circle_left" = 620,
    CHEVRON_CIRCLE_RIGHT => "chevron_circle_right" = 621,
    CHEVRON_CIRCLE_UP => "chevron_circle_up" = 622,
    CHEVRON_DOWN => "chevron_down" = 623,
    CHEVRON_LEFT => "chevron_left" = 624,
    CHEVRON_RIGHT => "chevron_right" = 625,
    CHEVRON_UP => "chevron_up" = 626,
    LONG_ARROW_DOWN => "long_arrow_down" = 632,
    LONG_ARROW_LEFT => "long_arrow_left" = 633,
    LONG_ARROW_RIGHT => "long_arrow_right" = 634,
    LONG_ARROW_UP => "long_arrow_up" = 635,
    BACKWARD => "backward" = 641,
    COMPRESS => "compress" = 642,
    EJECT => "eject" = 643,
    EXPAND => "expand" = 644,
    FAST_BACKWARD => "fast_backward" = 645,
    FAST_FORWARD => "fast_forward" = 646,
    FORWARD => "forward" = 647,
    PAUSE => "pause" = 648,
    PAUSE_CIRCLE => "pause_circle" = 649,
    PAUSE_CIRCLE_O => "pause_circle_o" = 650,
    PLAY => "play" = 651,
    PLAY_CIRCLE => "play_circle" = 652,
    PLAY_CIRCLE_O => "play_circle_o" = 653,
    STEP_BACKWARD => "step_backward" = 655,
    STEP_FORWARD => "step_forward" = 656,
    STOP => "stop" = 657,
    STOP_CIRCLE => "stop_circle" = 658,
    STOP_CIRCLE_O => "stop_circle_o" = 659,
    YOUTUBE_PLAY => "youtube_play" = 660,
    _500PX => "_500px" = 661,
    ADN => "adn" = 662,
    AMAZON => "amazon" = 663,
    ANDROID => "android" = 664,
    ANGELLIST => "angellist" = 665,
    APPLE => "apple" = 666,
    BEHANCE => "behance" = 667,
    BEHANCE_SQUARE => "behance_square" = 668,
    BITBUCKET => "bitbucket" = 669,
    BITBUCKET_SQUARE => "bitbucket_square" = 670,
    BLACK_TIE => "black_tie" = 672,
    BUYSELLADS => "buysellads" = 676,
    CHROME => "chrome" = 685,
    CODEPEN => "codepen" = 686,
    CODIEPIE => "codiepie" = 687,
    CONNECTDEVELOP => "connectdevelop" = 688,
    CONTAO => "contao" = 689,
    CSS3 => "css3" = 690,
    DASHCUBE => "dashcube" = 691,
    DELICIOUS => "delicious" = 692,
    DEVIANTART => "deviantart" = 693,
    DIGG => "digg" = 694,
    DRIBBBLE => "dribbble" = 695,
    DROPBOX => "dropbox" = 696,
    DRUPAL => "drupal" = 697,
    EDGE => "edge" = 698,
    EMPIRE => "empire" = 699,
    EXPEDITEDSSL => "expeditedssl" = 700,
    FACEBOOK => "facebook" = 701,
    FACEBOOK_F => "facebook_f" = 702,
    FACEBOOK_OFFICIAL => "facebook_official" = 703,
    FACEBOOK_SQUARE => "facebook_square" = 704,
    FIREFOX => "firefox" = 705,
    FLICKR => "flickr" = 706,
    FONTICONS => "fonticons" = 707,
    FORT_AWESOME => "fort_awesome" = 708,
    FORUMBEE => "forumbee" = 709,
    FOURSQUARE => "foursquare" = 710,
    GE => "ge" = 711,
    GET_POCKET => "get_pocket" = 712,
    GIT => "git" = 715,
    GIT_SQUARE => "git_square" = 716,
    GITHUB => "github" = 717,
    GITHUB_ALT => "github_alt" = 718,
    GITHUB_SQUARE => "github_square" = 719,
    GITTIP => "gittip" = 720,
    GOOGLE => "google" = 721,
    GOOGLE_PLUS => "google_plus" = 722,
    GOOGLE_PLUS_SQUARE => "google_plus_square" = 723,
    GRATIPAY => "gratipay" = 725,
    HACKER_NEWS => "hacker_news" = 726,
    HOUZZ => "houzz" = 727,
    HTML5 => "html5" = 728,
    INSTAGRAM => "instagram" = 729,
    INTERNET_EXPLORER => "internet_explorer" = 730,
    IOXHOST => "ioxhost" = 731,
    JOOMLA => "joomla" = 732,
    JSFIDDLE => "jsfiddle" = 733,
    LASTFM => "lastfm" = 734,
    LASTFM_SQUARE => "lastfm_square" = 735,
    LEANPUB => "leanpub" = 736,
    LINKEDIN => "linkedin" = 737,
    LINKEDIN_SQUARE => "linkedin_square" = 738,
    LINUX => "linux" = 739,
    MAXCDN => "maxcdn" = 740,
    MEANPATH => "meanpath" = 741,
    MEDIUM => "medium" = 742,
    MIXCLOUD => "mixcloud" = 743,
    MODX => "modx" = 744,
    ODNOKLASSNIKI => "odnoklassniki" = 745,
    ODNOKLASSNIKI_SQUARE => "odnoklassniki_square" = 746,
    OPENCART => "opencart" = 747,
    OPENID => "openid" = 748,
    OPERA => "opera" = 749,
    OPTIN_MONSTER => "optin_monster" = 750,
    PAGELINES => "pagelines" = 751,
    PIED_PIPER => "pied_piper" = 753,
    PIED_PIPER_ALT => "pied_piper_alt" = 754,
    PINTEREST => "pinterest" = 755,
    PINTEREST_P => "pinterest_p" = 756,
    PINTEREST_SQUARE => "pinterest_square" = 757,
    PRODUCT_HUNT => "product_hunt" = 758,
    QQ => "qq" = 759,
    RA => "ra" = 760,
    REBEL => "rebel" = 761,
    REDDIT => "reddit" = 762,
    REDDIT_ALIEN => "reddit_alien" = 763,
    REDDIT_SQUARE => "reddit_square" = 764,
    RENREN => "renren" = 765,
    SAFARI => "safari" = 766,
    SCRIBD => "scribd" = 767,
    SELLSY => "sellsy" = 768,
    SHIRTSINBULK => "shirtsinbulk" = 771,
    SIMPLYBUILT => "simplybuilt" = 772,
    SKYATLAS => "skyatlas" = 773,
    SKYPE => "skype" = 774,
    SLACK => "slack" = 775,
    SLIDESHARE => "slideshare" = 776,
    SOUNDCLOUD => "soundcloud" = 777,
    SPOTIFY => "spotify" = 778,
    STACK_EXCHANGE => "stack_exchange" = 779,
    STACK_OVERFLOW => "stack_overflow" = 780,
    STEAM => "steam" = 781,
    STEAM_SQUARE => "steam_square" = 782,
    STUMBLEUPON => "stumbleupon" = 783,
    STUMBLEUPON_CIRCLE => "stumbleupon_circle" = 784,
    TENCENT_WEIBO => "tencent_weibo" = 785,
    TRELLO => "trello" = 786,
    TRIPADVISOR => "tripadvisor" = 787,
    TUMBLR => "tumblr" = 788,
    TUMBLR_SQUARE => "tumblr_square" = 789,
    TWITCH => "twitch" = 790,
    TWITTER => "twitter" = 791,
    TWITTER_SQUARE => "twitter_square" = 792,
    USB => "usb" = 793,
    VIACOIN => "viacoin" = 794,
    VIMEO => "vimeo" = 795,
    VIMEO_SQUARE => "vimeo_square" = 796,
    VINE => "vine" = 797,
    VK => "vk" = 798,
    WECHAT => "wechat" = 799,
    WEIBO => "weibo" = 800,
    WEIXIN => "weixin" = 801,
    WHATSAPP => "whatsapp" = 802,
    WIKIPEDIA_W => "wikipedia_w" = 803,
    WINDOWS => "windows" = 804,
    WORDPRESS => "wordpress" = 805,
    XING => "xing" = 806,
    XING_SQUARE => "xing_square" = 807,
    Y_COMBINATOR => "y_combinator" = 808,
    Y_COMBINATOR_SQUARE => "y_combinator_square" = 809,
    YAHOO => "yahoo" = 810,
    YC => "yc" = 811,
    YC_SQUARE => "yc_square" = 812,
    YELP => "yelp" = 813,
    YOUTUBE => "youtube" = 814,
    YOUTUBE_SQUARE => "youtube_square" = 816,
    H_SQUARE => "h_square" = 818,
    HOSPITAL_O => "hospital_o" = 822,
    MEDKIT => "medkit" = 823,
    STETHOSCOPE => "stethoscope" = 825,
    USER_MD => "user_md" = 826,
}
