//! Built-in exercise catalog seeded into a fresh database.

use super::exercise::{Equipment, MuscleGroup};

pub const DEFAULT_EXERCISES: &[(&str, MuscleGroup, Equipment)] = &[
    ("Bench Press", MuscleGroup::Chest, Equipment::Barbell),
    ("Cable Crossover", MuscleGroup::Chest, Equipment::Cable),
    ("Cable Fly", MuscleGroup::Chest, Equipment::Cable),
    ("Chest Dip", MuscleGroup::Chest, Equipment::Bodyweight),
    ("Chest Press Machine", MuscleGroup::Chest, Equipment::Machine),
    ("Decline Bench Press", MuscleGroup::Chest, Equipment::Barbell),
    ("Decline Dumbbell Press", MuscleGroup::Chest, Equipment::Dumbbell),
    ("Dumbbell Fly", MuscleGroup::Chest, Equipment::Dumbbell),
    ("Dumbbell Press", MuscleGroup::Chest, Equipment::Dumbbell),
    ("Dumbbell Pullover", MuscleGroup::Chest, Equipment::Dumbbell),
    ("Floor Press", MuscleGroup::Chest, Equipment::Barbell),
    ("Incline Bench Press", MuscleGroup::Chest, Equipment::Barbell),
    ("Incline Cable Fly", MuscleGroup::Chest, Equipment::Cable),
    ("Incline Dumbbell Fly", MuscleGroup::Chest, Equipment::Dumbbell),
    ("Incline Dumbbell Press", MuscleGroup::Chest, Equipment::Dumbbell),
    ("Machine Fly", MuscleGroup::Chest, Equipment::Machine),
    ("Push-Up", MuscleGroup::Chest, Equipment::Bodyweight),
    ("Smith Machine Bench Press", MuscleGroup::Chest, Equipment::Machine),
    ("Barbell Row", MuscleGroup::Back, Equipment::Barbell),
    ("Cable Pullover", MuscleGroup::Back, Equipment::Cable),
    ("Chest-Supported Row", MuscleGroup::Back, Equipment::Machine),
    ("Chin-Up", MuscleGroup::Back, Equipment::Bodyweight),
    ("Close-Grip Lat Pulldown", MuscleGroup::Back, Equipment::Cable),
    ("Deadlift", MuscleGroup::Back, Equipment::Barbell),
    ("Dumbbell Row", MuscleGroup::Back, Equipment::Dumbbell),
    ("Face Pull", MuscleGroup::Back, Equipment::Cable),
    ("Inverted Row", MuscleGroup::Back, Equipment::Bodyweight),
    ("Lat Pulldown", MuscleGroup::Back, Equipment::Cable),
    ("Machine Row", MuscleGroup::Back, Equipment::Machine),
    ("Pendlay Row", MuscleGroup::Back, Equipment::Barbell),
    ("Pull-Up", MuscleGroup::Back, Equipment::Bodyweight),
    ("Rack Pull", MuscleGroup::Back, Equipment::Barbell),
    ("Reverse Grip Lat Pulldown", MuscleGroup::Back, Equipment::Cable),
    ("Seated Cable Row", MuscleGroup::Back, Equipment::Cable),
    ("Single-Arm Cable Row", MuscleGroup::Back, Equipment::Cable),
    ("Straight-Arm Pulldown", MuscleGroup::Back, Equipment::Cable),
    ("T-Bar Row", MuscleGroup::Back, Equipment::Barbell),
    ("Arnold Press", MuscleGroup::Shoulders, Equipment::Dumbbell),
    ("Barbell Front Raise", MuscleGroup::Shoulders, Equipment::Barbell),
    ("Cable Lateral Raise", MuscleGroup::Shoulders, Equipment::Cable),
    ("Cable Rear Delt Fly", MuscleGroup::Shoulders, Equipment::Cable),
    ("Dumbbell Shoulder Press", MuscleGroup::Shoulders, Equipment::Dumbbell),
    ("Dumbbell Shrug", MuscleGroup::Shoulders, Equipment::Dumbbell),
    ("Front Raise", MuscleGroup::Shoulders, Equipment::Dumbbell),
    ("Landmine Press", MuscleGroup::Shoulders, Equipment::Barbell),
    ("Lateral Raise", MuscleGroup::Shoulders, Equipment::Dumbbell),
    ("Machine Lateral Raise", MuscleGroup::Shoulders, Equipment::Machine),
    ("Machine Shoulder Press", MuscleGroup::Shoulders, Equipment::Machine),
    ("Overhead Press", MuscleGroup::Shoulders, Equipment::Barbell),
    ("Push Press", MuscleGroup::Shoulders, Equipment::Barbell),
    ("Rear Delt Fly", MuscleGroup::Shoulders, Equipment::Dumbbell),
    ("Reverse Machine Fly", MuscleGroup::Shoulders, Equipment::Machine),
    ("Shrug", MuscleGroup::Shoulders, Equipment::Barbell),
    ("Upright Row", MuscleGroup::Shoulders, Equipment::Barbell),
    ("Barbell Curl", MuscleGroup::Biceps, Equipment::Barbell),
    ("Cable Curl", MuscleGroup::Biceps, Equipment::Cable),
    ("Cable Hammer Curl", MuscleGroup::Biceps, Equipment::Cable),
    ("Concentration Curl", MuscleGroup::Biceps, Equipment::Dumbbell),
    ("Dumbbell Curl", MuscleGroup::Biceps, Equipment::Dumbbell),
    ("Dumbbell Preacher Curl", MuscleGroup::Biceps, Equipment::Dumbbell),
    ("EZ-Bar Curl", MuscleGroup::Biceps, Equipment::Barbell),
    ("Hammer Curl", MuscleGroup::Biceps, Equipment::Dumbbell),
    ("Incline Dumbbell Curl", MuscleGroup::Biceps, Equipment::Dumbbell),
    ("Machine Curl", MuscleGroup::Biceps, Equipment::Machine),
    ("Preacher Curl", MuscleGroup::Biceps, Equipment::Barbell),
    ("Reverse Curl", MuscleGroup::Biceps, Equipment::Barbell),
    ("Spider Curl", MuscleGroup::Biceps, Equipment::Dumbbell),
    ("Bench Dip", MuscleGroup::Triceps, Equipment::Bodyweight),
    ("Cable Overhead Tricep Extension", MuscleGroup::Triceps, Equipment::Cable),
    ("Close-Grip Bench Press", MuscleGroup::Triceps, Equipment::Barbell),
    ("Diamond Push-Up", MuscleGroup::Triceps, Equipment::Bodyweight),
    ("Dip", MuscleGroup::Triceps, Equipment::Bodyweight),
    ("Machine Tricep Extension", MuscleGroup::Triceps, Equipment::Machine),
    ("Overhead Tricep Extension", MuscleGroup::Triceps, Equipment::Dumbbell),
    ("Rope Pushdown", MuscleGroup::Triceps, Equipment::Cable),
    ("Single-Arm Tricep Pushdown", MuscleGroup::Triceps, Equipment::Cable),
    ("Skull Crusher", MuscleGroup::Triceps, Equipment::Barbell),
    ("Tricep Dip Machine", MuscleGroup::Triceps, Equipment::Machine),
    ("Tricep Kickback", MuscleGroup::Triceps, Equipment::Dumbbell),
    ("Tricep Pushdown", MuscleGroup::Triceps, Equipment::Cable),
    ("Belt Squat", MuscleGroup::Quads, Equipment::Machine),
    ("Box Squat", MuscleGroup::Quads, Equipment::Barbell),
    ("Front Squat", MuscleGroup::Quads, Equipment::Barbell),
    ("Goblet Squat", MuscleGroup::Quads, Equipment::Dumbbell),
    ("Hack Squat", MuscleGroup::Quads, Equipment::Machine),
    ("Landmine Squat", MuscleGroup::Quads, Equipment::Barbell),
    ("Leg Extension", MuscleGroup::Quads, Equipment::Machine),
    ("Leg Press", MuscleGroup::Quads, Equipment::Machine),
    ("Pendulum Squat", MuscleGroup::Quads, Equipment::Machine),
    ("Pistol Squat", MuscleGroup::Quads, Equipment::Bodyweight),
    ("Reverse Lunge", MuscleGroup::Quads, Equipment::Dumbbell),
    ("Sissy Squat", MuscleGroup::Quads, Equipment::Bodyweight),
    ("Smith Machine Squat", MuscleGroup::Quads, Equipment::Machine),
    ("Squat", MuscleGroup::Quads, Equipment::Barbell),
    ("Step-Up", MuscleGroup::Quads, Equipment::Dumbbell),
    ("Dumbbell Good Morning", MuscleGroup::Hamstrings, Equipment::Dumbbell),
    ("Dumbbell Romanian Deadlift", MuscleGroup::Hamstrings, Equipment::Dumbbell),
    ("Glute-Ham Raise", MuscleGroup::Hamstrings, Equipment::Bodyweight),
    ("Good Morning", MuscleGroup::Hamstrings, Equipment::Barbell),
    ("Leg Curl", MuscleGroup::Hamstrings, Equipment::Machine),
    ("Nordic Curl", MuscleGroup::Hamstrings, Equipment::Bodyweight),
    ("Romanian Deadlift", MuscleGroup::Hamstrings, Equipment::Barbell),
    ("Seated Leg Curl", MuscleGroup::Hamstrings, Equipment::Machine),
    ("Single-Leg Deadlift", MuscleGroup::Hamstrings, Equipment::Dumbbell),
    ("Stiff-Leg Deadlift", MuscleGroup::Hamstrings, Equipment::Barbell),
    ("Sumo Deadlift", MuscleGroup::Hamstrings, Equipment::Barbell),
    ("Bulgarian Split Squat", MuscleGroup::Glutes, Equipment::Dumbbell),
    ("Cable Kickback", MuscleGroup::Glutes, Equipment::Cable),
    ("Cable Pull-Through", MuscleGroup::Glutes, Equipment::Cable),
    ("Curtsy Lunge", MuscleGroup::Glutes, Equipment::Dumbbell),
    ("Donkey Kick", MuscleGroup::Glutes, Equipment::Bodyweight),
    ("Glute Bridge", MuscleGroup::Glutes, Equipment::Bodyweight),
    ("Hip Abduction Machine", MuscleGroup::Glutes, Equipment::Machine),
    ("Hip Thrust", MuscleGroup::Glutes, Equipment::Barbell),
    ("Lateral Lunge", MuscleGroup::Glutes, Equipment::Dumbbell),
    ("Lunge", MuscleGroup::Glutes, Equipment::Dumbbell),
    ("Single-Leg Hip Thrust", MuscleGroup::Glutes, Equipment::Bodyweight),
    ("Sumo Squat", MuscleGroup::Glutes, Equipment::Dumbbell),
    ("Walking Lunge", MuscleGroup::Glutes, Equipment::Dumbbell),
    ("Barbell Calf Raise", MuscleGroup::Calves, Equipment::Barbell),
    ("Calf Press on Leg Press", MuscleGroup::Calves, Equipment::Machine),
    ("Donkey Calf Raise", MuscleGroup::Calves, Equipment::Machine),
    ("Dumbbell Calf Raise", MuscleGroup::Calves, Equipment::Dumbbell),
    ("Seated Calf Raise", MuscleGroup::Calves, Equipment::Machine),
    ("Single-Leg Calf Raise", MuscleGroup::Calves, Equipment::Bodyweight),
    ("Smith Machine Calf Raise", MuscleGroup::Calves, Equipment::Machine),
    ("Standing Calf Raise", MuscleGroup::Calves, Equipment::Machine),
    ("Ab Wheel Rollout", MuscleGroup::Core, Equipment::Other),
    ("Bicycle Crunch", MuscleGroup::Core, Equipment::Bodyweight),
    ("Cable Crunch", MuscleGroup::Core, Equipment::Cable),
    ("Cable Woodchop", MuscleGroup::Core, Equipment::Cable),
    ("Crunch", MuscleGroup::Core, Equipment::Bodyweight),
    ("Dead Bug", MuscleGroup::Core, Equipment::Bodyweight),
    ("Decline Sit-Up", MuscleGroup::Core, Equipment::Bodyweight),
    ("Dragon Flag", MuscleGroup::Core, Equipment::Bodyweight),
    ("Hanging Knee Raise", MuscleGroup::Core, Equipment::Bodyweight),
    ("Hanging Leg Raise", MuscleGroup::Core, Equipment::Bodyweight),
    ("Leg Raise", MuscleGroup::Core, Equipment::Bodyweight),
    ("Pallof Press", MuscleGroup::Core, Equipment::Cable),
    ("Plank", MuscleGroup::Core, Equipment::Bodyweight),
    ("Russian Twist", MuscleGroup::Core, Equipment::Bodyweight),
    ("Side Plank", MuscleGroup::Core, Equipment::Bodyweight),
    ("V-Up", MuscleGroup::Core, Equipment::Bodyweight),
    ("Barbell Clean", MuscleGroup::FullBody, Equipment::Barbell),
    ("Barbell Snatch", MuscleGroup::FullBody, Equipment::Barbell),
    ("Burpee", MuscleGroup::FullBody, Equipment::Bodyweight),
    ("Clean and Press", MuscleGroup::FullBody, Equipment::Barbell),
    ("Dumbbell Snatch", MuscleGroup::FullBody, Equipment::Dumbbell),
    ("Farmer's Walk", MuscleGroup::FullBody, Equipment::Dumbbell),
    ("Kettlebell Swing", MuscleGroup::FullBody, Equipment::Other),
    ("Thruster", MuscleGroup::FullBody, Equipment::Barbell),
    ("Turkish Get-Up", MuscleGroup::FullBody, Equipment::Other),
];
