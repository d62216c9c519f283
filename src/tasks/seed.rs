/// Landmarks served when no catalog file is configured: name, latitude, longitude.
pub const LANDMARKS: &[(&str, f64, f64)] = &[
    ("Eiffel Tower", 48.8584, 2.2945),
    ("Statue of Liberty", 40.6892, -74.0445),
    ("Great Wall of China", 40.4319, 116.5704),
    ("Sydney Opera House", -33.8568, 151.2153),
    ("Skånland Båtlag", 68.58404, 16.56120),
    ("Taj Mahal", 27.1751, 78.0421),
    ("Machu Picchu", -13.1631, -72.5450),
    ("Colosseum", 41.8902, 12.4922),
    ("Pyramids of Giza", 29.9792, 31.1342),
    ("Big Ben", 51.5007, -0.1246),
    ("Mount Everest", 27.9881, 86.9250),
    ("Niagara Falls", 43.0896, -79.0849),
    ("Tokyo Tower", 35.6586, 139.7454),
    ("Christ the Redeemer", -22.9519, -43.2105),
    ("Burj Khalifa", 25.1972, 55.2744),
    ("Angkor Wat", 13.4125, 103.8670),
    ("The Louvre", 48.8606, 2.3376),
    ("Golden Gate Bridge", 37.8199, -122.4783),
    ("Victoria Falls", -17.9246, 25.8573),
    ("The Vatican City", 41.9029, 12.4534),
    ("Stonehenge", 51.1789, -1.8262),
    ("The Blue Lagoon", 63.8804, -22.4503),
    ("Hollywood Sign", 34.1341, -118.3217),
];
