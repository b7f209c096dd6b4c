//! Campus layout: three school buildings, covered corridors and, behind the
//! reveal toggle, their stairwells, restrooms and rooms.
//!
//! Units are meters-ish; one storey is 16 units tall. Positions are box
//! centers.

use super::shape::{palette, Shape, ShapeGroup};

type Row = (&'static str, [f32; 3], [f32; 3]);

/// Extent of a standard classroom.
const CLASSROOM: [f32; 3] = [28.0, 16.0, 20.0];

const BUILDINGS: &[Row] = &[
    ("1棟", [-18.0, 24.0, 143.0], [284.0, 48.0, 32.0]),
    ("1棟sub", [-132.0, 16.0, 121.0], [28.0, 32.0, 12.0]),
    ("2棟", [32.0, 32.0, 21.0], [244.0, 64.0, 32.0]),
    ("2棟女子トイレ", [78.0, 32.0, -1.0], [16.0, 64.0, 12.0]),
    ("2棟男子トイレ", [-42.0, 32.0, -1.0], [16.0, 64.0, 12.0]),
    ("3棟1-2", [42.0, 16.0, -99.0], [208.0, 32.0, 28.0]),
    ("3棟3", [94.0, 40.0, -99.0], [104.0, 16.0, 28.0]),
    ("3棟sub", [100.0, 24.0, -119.0], [28.0, 48.0, 12.0]),
    ("3棟sub2", [100.0, 16.0, -133.0], [28.0, 32.0, 16.0]),
];

const CORRIDORS: &[Row] = &[
    ("更衣室側", [-56.0, 32.0, 82.0], [12.0, 32.0, 90.0]),
    ("食堂側", [92.0, 24.0, 82.0], [12.0, 16.0, 90.0]),
    ("視聴覚側", [92.0, 24.0, -40.0], [12.0, 16.0, 90.0]),
];

const STAIRWELLS: &[Row] = &[
    ("生徒会室側階段", [-44.0, 32.0, 27.0], [12.0, 64.0, 20.0]),
    ("3棟体育館側", [-44.0, 16.0, -93.0], [12.0, 32.0, 16.0]),
    ("自習室側階段", [80.0, 32.0, 27.0], [12.0, 64.0, 20.0]),
    ("調理室側", [78.0, 24.0, 121.0], [16.0, 48.0, 12.0]),
    ("職員室側", [-96.0, 24.0, 149.0], [12.0, 48.0, 20.0]),
    ("保健室側", [-138.0, 16.0, 121.0], [16.0, 32.0, 12.0]),
    ("音楽室側", [106.0, 24.0, -119.0], [16.0, 48.0, 12.0]),
];

#[derive(Clone, Copy)]
enum Restroom {
    Men,
    Women,
    Accessible,
}

impl Restroom {
    fn label(self) -> &'static str {
        match self {
            Self::Men => "男子トイレ",
            Self::Women => "女子トイレ",
            Self::Accessible => "多目的トイレ",
        }
    }

    fn color(self) -> [f32; 3] {
        match self {
            Self::Men => palette::BLUE,
            Self::Women => palette::RED,
            Self::Accessible => palette::LIGHT_GREEN,
        }
    }
}

const RESTROOMS: &[(Restroom, [f32; 3], [f32; 3])] = &[
    (Restroom::Men, [78.0, 8.0, 109.0], [16.0, 16.0, 12.0]),
    (Restroom::Women, [78.0, 8.0, 97.0], [16.0, 16.0, 12.0]),
    (Restroom::Men, [78.0, 24.0, 109.0], [16.0, 16.0, 12.0]),
    (Restroom::Women, [78.0, 24.0, 97.0], [16.0, 16.0, 12.0]),
    (Restroom::Accessible, [78.0, 8.0, 85.0], [16.0, 16.0, 12.0]),
    (Restroom::Women, [78.0, 8.0, -1.0], [16.0, 16.0, 12.0]),
    (Restroom::Women, [78.0, 24.0, -1.0], [16.0, 16.0, 12.0]),
    (Restroom::Women, [78.0, 40.0, -1.0], [16.0, 16.0, 12.0]),
    (Restroom::Women, [78.0, 56.0, -1.0], [16.0, 16.0, 12.0]),
    (Restroom::Men, [-42.0, 8.0, -1.0], [16.0, 16.0, 12.0]),
    (Restroom::Men, [-42.0, 24.0, -1.0], [16.0, 16.0, 12.0]),
    (Restroom::Men, [-42.0, 40.0, -1.0], [16.0, 16.0, 12.0]),
    (Restroom::Men, [-42.0, 56.0, -1.0], [16.0, 16.0, 12.0]),
    (Restroom::Men, [100.0, 8.0, -133.0], [28.0, 16.0, 16.0]),
    (Restroom::Women, [100.0, 24.0, -133.0], [28.0, 16.0, 16.0]),
];

const ROOMS: &[Row] = &[
    // Building 1, ground floor
    ("調理室", [111.0, 8.0, 143.0], [26.0, 16.0, 32.0]),
    ("調理準備室", [91.0, 8.0, 149.0], [14.0, 16.0, 20.0]),
    ("書庫室", [77.0, 8.0, 149.0], [14.0, 16.0, 20.0]),
    ("応接室", [63.0, 8.0, 149.0], [14.0, 16.0, 20.0]),
    ("校長室", [49.0, 8.0, 149.0], [14.0, 16.0, 20.0]),
    ("事務室", [30.0, 8.0, 149.0], [24.0, 16.0, 20.0]),
    ("職員玄関", [8.0, 8.0, 149.0], [20.0, 16.0, 20.0]),
    ("印刷室", [-9.0, 8.0, 149.0], [14.0, 16.0, 20.0]),
    ("全日職員室", [-36.0, 8.0, 149.0], [40.0, 16.0, 20.0]),
    ("第二職員室", [-73.0, 8.0, 149.0], [34.0, 16.0, 20.0]),
    ("放送室", [-109.0, 8.0, 149.0], [14.0, 16.0, 20.0]),
    ("定時制保健室", [-123.0, 8.0, 149.0], [14.0, 16.0, 20.0]),
    ("全日制保健室", [-145.0, 8.0, 149.0], [30.0, 16.0, 20.0]),
    // Building 1, second floor
    ("定時制職員室", [-145.0, 24.0, 143.0], [30.0, 16.0, 32.0]),
    ("定時制職員室", [-116.0, 24.0, 149.0], [28.0, 16.0, 20.0]),
    ("3-9", [-76.0, 24.0, 149.0], CLASSROOM),
    ("3-8", [-48.0, 24.0, 149.0], CLASSROOM),
    ("選択A", [-20.0, 24.0, 149.0], CLASSROOM),
    ("", [9.0, 24.0, 149.0], [30.0, 16.0, 20.0]),
    ("多目的室", [40.0, 24.0, 149.0], [32.0, 16.0, 20.0]),
    ("作法室", [91.0, 24.0, 149.0], [14.0, 16.0, 20.0]),
    ("英語科準備室", [77.0, 24.0, 149.0], [14.0, 16.0, 20.0]),
    ("国語科準備室", [63.0, 24.0, 149.0], [14.0, 16.0, 20.0]),
    ("被服室", [111.0, 24.0, 143.0], [26.0, 16.0, 32.0]),
    // Building 1, third floor
    ("コンピューター室", [-145.0, 40.0, 149.0], [30.0, 16.0, 20.0]),
    ("数学科準備室", [-109.0, 40.0, 149.0], [14.0, 16.0, 20.0]),
    ("定時制進路指導室", [-123.0, 40.0, 149.0], [14.0, 16.0, 20.0]),
    ("図書室", [-52.0, 40.0, 149.0], [76.0, 16.0, 20.0]),
    ("図書整理室", [-2.0, 40.0, 149.0], [24.0, 16.0, 20.0]),
    ("社会科教室", [33.0, 40.0, 149.0], [46.0, 16.0, 20.0]),
    ("美術準備室", [91.0, 40.0, 149.0], [14.0, 16.0, 20.0]),
    ("デッサン室", [77.0, 40.0, 149.0], [14.0, 16.0, 20.0]),
    ("社会科準備室", [63.0, 40.0, 149.0], [14.0, 16.0, 20.0]),
    ("美術室", [111.0, 40.0, 143.0], [26.0, 16.0, 32.0]),
    // Building 2, ground floor
    ("女子更衣室", [-76.0, 8.0, 16.0], [28.0, 16.0, 14.0]),
    ("男子更衣室", [-76.0, 8.0, 30.0], [28.0, 16.0, 14.0]),
    ("未来館", [-76.0, 8.0, 56.0], [28.0, 16.0, 38.0]),
    ("生徒会室", [-24.0, 8.0, 27.0], [28.0, 16.0, 20.0]),
    ("定時制女子更衣室", [-4.0, 8.0, 27.0], [12.0, 16.0, 20.0]),
    ("3-6", [14.0, 8.0, 27.0], [24.0, 16.0, 20.0]),
    ("3-5", [38.0, 8.0, 27.0], [24.0, 16.0, 20.0]),
    ("3-4", [62.0, 8.0, 27.0], [24.0, 16.0, 20.0]),
    ("自習室", [112.0, 8.0, 27.0], CLASSROOM),
    ("進路指導室", [140.0, 8.0, 27.0], CLASSROOM),
    // Building 2, second floor
    ("2-9", [-76.0, 24.0, 27.0], CLASSROOM),
    ("2-8", [-24.0, 24.0, 27.0], CLASSROOM),
    ("2-7", [4.0, 24.0, 27.0], CLASSROOM),
    ("2-6", [32.0, 24.0, 27.0], CLASSROOM),
    ("3-3", [60.0, 24.0, 27.0], CLASSROOM),
    ("3-2", [112.0, 24.0, 27.0], CLASSROOM),
    ("3-1", [140.0, 24.0, 27.0], CLASSROOM),
    // Building 2, third floor
    ("2-5", [-76.0, 40.0, 27.0], CLASSROOM),
    ("2-4", [-24.0, 40.0, 27.0], CLASSROOM),
    ("2-3", [4.0, 40.0, 27.0], CLASSROOM),
    ("2-2", [32.0, 40.0, 27.0], CLASSROOM),
    ("2-1", [60.0, 40.0, 27.0], CLASSROOM),
    ("1-9", [112.0, 40.0, 27.0], CLASSROOM),
    ("1-8", [140.0, 40.0, 27.0], CLASSROOM),
    // Building 2, fourth floor
    ("1-7", [-76.0, 56.0, 27.0], CLASSROOM),
    ("1-6", [-24.0, 56.0, 27.0], CLASSROOM),
    ("1-5", [4.0, 56.0, 27.0], CLASSROOM),
    ("1-4", [32.0, 56.0, 27.0], CLASSROOM),
    ("1-3", [60.0, 56.0, 27.0], CLASSROOM),
    ("時報室", [92.0, 56.0, 27.0], [12.0, 16.0, 20.0]),
    ("1-2", [112.0, 56.0, 27.0], CLASSROOM),
    ("1-1", [140.0, 56.0, 27.0], CLASSROOM),
    // Building 3, ground floor
    ("テキサス", [130.0, 8.0, -99.0], [32.0, 16.0, 28.0]),
    ("理科準備室", [106.0, 8.0, -93.0], [16.0, 16.0, 16.0]),
    ("化学室", [63.0, 8.0, -93.0], [46.0, 16.0, 16.0]),
    ("化学室準備室", [32.0, 8.0, -93.0], [16.0, 16.0, 16.0]),
    ("生物室", [1.0, 8.0, -93.0], [46.0, 16.0, 16.0]),
    ("生物準備室", [-30.0, 8.0, -93.0], [16.0, 16.0, 16.0]),
    // Building 3, second floor
    ("音楽室", [130.0, 24.0, -99.0], [32.0, 16.0, 28.0]),
    ("音楽準備室", [106.0, 24.0, -93.0], [16.0, 16.0, 16.0]),
    ("物理実験室", [63.0, 24.0, -93.0], [46.0, 16.0, 16.0]),
    ("物理準備室", [32.0, 24.0, -93.0], [16.0, 16.0, 16.0]),
    ("地学実験室", [1.0, 24.0, -93.0], [46.0, 16.0, 16.0]),
    ("地学準備室", [-30.0, 24.0, -93.0], [16.0, 16.0, 16.0]),
    // Building 3, third floor
    ("視聴覚室", [130.0, 40.0, -99.0], [32.0, 16.0, 28.0]),
    ("視聴覚準備室", [106.0, 40.0, -93.0], [16.0, 16.0, 16.0]),
    ("書道室", [78.0, 40.0, -93.0], [40.0, 16.0, 16.0]),
    ("教材室", [50.0, 40.0, -93.0], [16.0, 16.0, 16.0]),
];

/// Side length of the square ground plane.
pub const GROUND_EXTENT: f32 = 350.0;

/// Ground slab thickness. The slab's top face sits at y = 0.
const GROUND_THICKNESS: f32 = 0.1;

/// Build every campus shape in draw order.
pub(super) fn shapes() -> Vec<Shape> {
    let rows = |group: ShapeGroup, rows: &'static [Row], color: [f32; 3]| {
        rows.iter().map(move |&(label, position, size)| {
            Shape::new(group, label, position, size, color)
        })
    };

    let mut shapes = Vec::with_capacity(
        1 + BUILDINGS.len()
            + CORRIDORS.len()
            + STAIRWELLS.len()
            + RESTROOMS.len()
            + ROOMS.len(),
    );
    shapes.push(Shape::new(
        ShapeGroup::Ground,
        "ground",
        [0.0, -GROUND_THICKNESS * 0.5, 0.0],
        [GROUND_EXTENT, GROUND_THICKNESS, GROUND_EXTENT],
        palette::GREEN,
    ));
    shapes.extend(rows(ShapeGroup::Building, BUILDINGS, palette::LIGHT_GREY));
    shapes.extend(rows(ShapeGroup::Corridor, CORRIDORS, palette::LIGHT_GREY));
    shapes.extend(rows(ShapeGroup::Stairwell, STAIRWELLS, palette::YELLOW));
    shapes.extend(RESTROOMS.iter().map(|&(kind, position, size)| {
        Shape::new(
            ShapeGroup::Restroom,
            kind.label(),
            position,
            size,
            kind.color(),
        )
    }));
    shapes.extend(rows(ShapeGroup::Room, ROOMS, palette::WHITE));
    shapes
}
