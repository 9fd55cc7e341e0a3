// Generated table data. Do not edit by hand.

use super::MidiTable;

/// 8th-order elliptic lowpass sections for a 44100 Hz stream,
/// one per MIDI pitch.
pub(crate) static MIDI_ELLIPTIC_44100: MidiTable = [
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.003094862563763469, -0.024541547772543113, 0.08535538621680425, -0.17006539707486645, 0.2123133921693989, -0.17006539707486648, 0.08535538621680426, -0.024541547772543113, 0.003094862563763469],
        [1.0, -7.916463294351019, 27.428966150503147, -54.327253052728665, 67.27805000494754, -53.342774716272416, 26.443791670832784, -7.493747789269431, 0.9294310263758947],
    ],
    [
        [0.0030937977978379404, -0.024506769356689318, 0.0851688743752498, -0.16961531143807881, 0.2117188172999331, -0.16961531143807876, 0.08516887437524978, -0.024506769356689308, 0.0030937977978379386],
        [1.0, -7.910847328485176, 27.391379671132015, -54.219508871332366, 67.10658380518024, -53.17918010088823, 26.35022515872652, -7.464047602809988, 0.9253952685369297],
    ],
    [
        [0.003093018757284575, -0.02447111565263513, 0.08497161828499264, -0.1691346948186758, 0.21108234694766576, -0.16913469481867577, 0.08497161828499263, -0.02447111565263513, 0.0030930187572845744],
        [1.0, -7.904818479849409, 27.35112304198617, -54.10438226037044, 66.92381114673229, -53.00523155708837, 26.250993043835503, -7.432633589300558, 0.9211386541497257],
    ],
    [
        [0.0030925832610728837, -0.024434669233297204, 0.08476301395365603, -0.16862131188675653, 0.210400767952535, -0.1686213118867565, 0.08476301395365603, -0.024434669233297204, 0.0030925832610728845],
        [1.0, -7.898342625913733, 27.30798607895084, -53.98132217974472, 66.72893646326975, -52.82024772657863, 26.1457504442624, -7.399410747717047, 0.9166502936214336],
    ],
    [
        [0.0030925572683507875, -0.024397531797577938, 0.08454242391576917, -0.1680727509935054, 0.20967060343858052, -0.16807275099350544, 0.08454242391576922, -0.02439753179757794, 0.0030925572683507875],
        [1.0, -7.891382461946666, 27.261740179530243, -53.84973255826303, 66.52110424471638, -52.62350076174988, 26.03413181425892, -7.36427936275904, 0.9119189064510397],
    ],
    [
        [0.00309301589795868, -0.02435982659293193, 0.08430917509920201, -0.16748640992718355, 0.20888809140156098, -0.16748640992718355, 0.08430917509920201, -0.02435982659293193, 0.00309301589795868],
        [1.0, -7.883897174360738, 27.212136578688778, -53.708968403187484, 66.29939439972046, -52.41421321768197, 25.91574984486287, -7.327134853793456, 0.9069328261282696],
    ],
    [
        [0.0030940445704372575, -0.02432170104659124, 0.08406255644227179, -0.16685948066452289, 0.20804916195975554, -0.16685948066452289, 0.08406255644227179, -0.024321701046591242, 0.003094044570437259],
        [1.0, -7.875842078573238, 27.158904437156934, -53.55833158777642, 66.06281730264473, -52.19155478931066, 25.790194341220857, -7.28786763295032, 0.9016800081844225],
    ],
    [
        [0.00309574028764002, -0.024283329606530762, 0.0838018162075974, -0.16618893309756252, 0.20714941330862438, -0.16618893309756252, 0.08380181620759738, -0.02428332960653076, 0.003095740287640019],
        [1.0, -7.867168217464156, 27.101748747696963, -53.39706629822416, 65.81030851911493, -51.95463890137765, 25.65703108481782, -7.246362975450869, 0.8961480418308309],
    ],
    [
        [0.0030982130671922403, -0.024244916787847213, 0.08352615892556299, -0.16547149773114866, 0.20618408646218137, -0.16547149773114864, 0.08352615892556298, -0.02424491678784721, 0.0030982130671922395],
        [1.0, -7.85782191609236, 27.04034804409924, -53.224354122717855, 65.54072320872986, -51.70251916362083, 25.515800691207794, -7.202500905772415, 0.890324165659801],
    ],
    [
        [0.00310158755155189, -0.02420670041293115, 0.08323474188403522, -0.16470364736662949, 0.20514803891811062, -0.1647036473666295, 0.08323474188403523, -0.02420670041293115, 0.0031015875515518895],
        [1.0, -7.847744287869239, 26.97435189708037, -53.039308767493324, 65.25283020959942, -51.434185709712324, 25.366017476685396, -7.156156103851339, 0.8841952879233476],
    ],
    [
        [0.0031060048144102275, -0.024168955024115483, 0.08292667106115933, -0.1638815778139369, 0.2040357174524115, -0.1638815778139369, 0.08292667106115933, -0.02416895502411548, 0.003106004814410227],
        [1.0, -7.836870686883497, 26.903378180836505, -52.84097038801592, 64.94530581727399, -51.14856144594746, 25.207168350728377, -7.10719783620174, 0.8777480119461977],
    ],
    [
        [0.0031116243907290627, -0.024131995434747297, 0.08260099637398417, -0.16300118770875346, 0.20284113033575754, -0.1630011877087535, 0.08260099637398417, -0.024131995434747297, 0.0031116243907290636],
        [1.0, -7.825130100518919, 26.82701009384907, -52.62829952803061, 64.61672728077528, -50.84449824491409, 25.03871175506852, -7.055489917591537, 0.8709686672709973],
    ],
    [
        [0.00311862656098334, -0.02409618036804176, 0.08225670608659787, -0.16205805755560632, 0.20155781937132095, -0.1620580575556063, 0.08225670608659783, -0.024096180368041748, 0.003118626560983338],
        [1.0, -7.812444475906389, 26.744792917742004, -52.40017066557027, 64.26556605132083, -50.52077313064782, 24.860076675006667, -7.000890709777808, 0.8638433471745385],
    ],
    [
        [0.0031272149253322996, -0.02406191611162233, 0.08189272018661875, -0.1610474281736525, 0.20017883228663474, -0.16104742817365247, 0.08189272018661872, -0.024061916111622325, 0.0031272149253322988],
        [1.0, -7.798727973099938, 26.656230498673537, -52.155365373511536, 63.890180835524305, -50.176084515473335, 24.670661754185986, -6.943253164766274, 0.8563579532332362],
    ],
    [
        [0.0031376193096942485, -0.024029660088044302, 0.08150788249748558, -0.15996417879216795, 0.19869669617473826, -0.15996417879216793, 0.08150788249748557, -0.024029660088044295, 0.0031376193096942476],
        [1.0, -7.78388613716321, 26.56078143706939, -51.8925651134487, 63.48881052503626, -49.80904856527404, 24.46983455059585, -6.882424921134568, 0.8484982476529699],
    ],
    [
        [0.0031500990533191156, -0.023999924206218687, 0.08110095124530865, -0.15880280513034797, 0.19710339287756878, -0.15880280513034797, 0.08110095124530865, -0.023999924206218683, 0.0031500990533191147],
        [1.0, -7.767814980596656, 26.457854973662048, -51.610343696137775, 63.05956709954218, -49.418195789788584, 24.256930979221394, -6.81824846315003, 0.8402499141112366],
    ],
    [
        [0.003164946736779404, -0.023973277813437444, 0.08067058774250836, -0.15755739790446605, 0.1953903374429516, -0.15755739790446602, 0.08067058774250835, -0.02397327781343744, 0.0031649467367794028],
        [1.0, -7.750399966727792, 26.346806563038584, -51.307159460302, 62.60042863067717, -49.00196797824361, 24.031254995619907, -6.750561353726452, 0.8315986278868355],
    ],
    [
        [0.00318249242076368, -0.023950350010032578, 0.08021534278588402, -0.15622162233880535, 0.19354836107169893, -0.15622162233880535, 0.08021534278588402, -0.023950350010032578, 0.003182492420763679],
        [1.0, -7.731514883829902, 26.22693313052038, -50.98134724507498, 62.10923255178804, -48.55871562877539, 23.792078584931488, -6.679196553701798, 0.8225301360719588],
    ],
    [
        [0.0032031084801995274, -0.023931831015232694, 0.0797336402945247, -0.15478869941966833, 0.1915677003095212, -0.15478869941966833, 0.0797336402945247, -0.02393183101523269, 0.0032031084801995274],
        [1.0, -7.711020598832607, 26.097468014579057, -50.63111026084728, 61.583669403757455, -48.086696053302994, 23.53864213256131, -6.603982841480015, 0.813030348671359],
    ],
    [
        [0.0032272151357414813, -0.02391847217922239, 0.07922375763453211, -0.1532513898292806, 0.1894379946359222, -0.1532513898292806, 0.07922375763453211, -0.023918472179222394, 0.0032272151357414813],
        [1.0, -7.688763678549323, 25.95757560559766, -50.25451200001562, 61.02127732162428, -47.58407237845715, 23.270155266136364, -6.5247453487590175, 0.8030854413905256],
    ],
    [
        [0.003255286806402998, -0.023911084117238402, 0.07868380199593791, -0.1516019817339658, 0.18714829506478048, -0.15160198173396583, 0.07868380199593793, -0.023911084117238406, 0.0032552868064029987],
        [1.0, -7.664574865382608, 25.806345703185784, -49.84946837455229, 60.41943759193387, -47.048913708518455, 22.9857982734595, -6.44130622985162, 0.7926819708964498],
    ],
    [
        [0.0032878594341941153, -0.02391053228961127, 0.07811168210805303, -0.1498322838840067, 0.18468708690373362, -0.1498322838840067, 0.078111682108053, -0.023910532289611267, 0.0032878594341941153],
        [1.0, -7.638267393495845, 25.642787629150902, -49.413740323079956, 59.77537168819519, -46.47919676874196, 22.684724218150638, -6.353485483977968, 0.7818070032972161],
    ],
    [
        [0.0033255389654507023, -0.023917729157695525, 0.07750507451216335, -0.14793362581588657, 0.18204233042489776, -0.14793362581588657, 0.07750507451216335, -0.023917729157695515, 0.003325538965450701],
        [1.0, -7.609635130481154, 25.465824152467157, -48.94492719813779, 59.086140283117174, -45.872809407529374, 22.36606189351989, -6.261101951835702, 0.7704482565263151],
    ],
    [
        [0.0033690112158971776, -0.023933621797511122, 0.07686138357008826, -0.14589686733423152, 0.17920152387864305, -0.14589686733423152, 0.07686138357008823, -0.023933621797511115, 0.0033690112158971768],
        [1.0, -7.5784505286401345, 25.27428530720375, -48.440461326674, 58.34864484305716, -45.22755640411934, 22.02891977594026, -6.163974509695817, 0.7585942572300572],
    ],
    [
        [0.0034190533996584093, -0.023959173534735784, 0.07617769439709123, -0.14371241989021788, 0.1761517940325942, -0.14371241989021785, 0.07617769439709121, -0.023959173534735777, 0.003419053399658409],
        [1.0, -7.5444623691671096, 25.06690221562993, -47.89760423581008, 57.55963253382062, -44.54116810502432, 21.672391161456023, -6.0619234861685936, 0.7462345126370327],
    ],
    [
        [0.003476547669360566, -0.0239953377554714, 0.07545071800371454, -0.14137028295839038, 0.17288002023355004, -0.14137028295839035, 0.07545071800371451, -0.023995337755471385, 0.0034765476693605643],
        [1.0, -7.507393281838263, 24.842301068109823, -47.31344515405566, 56.71570530879385, -43.811312497215276, 21.295560693320148, -5.954772328556008, 0.7333596977321966],
    ],
    [
        [0.0035424970989075782, -0.0240430215191671, 0.07467672816684891, -0.13886009902617294, 0.16937299886086948, -0.13886009902617294, 0.07467672816684892, -0.02404302151916709, 0.0035424970989075774],
        [1.0, -7.46693702233463, 24.59899746074319, -46.6849025379299, 55.81333421103339, -43.03561141836872, 20.89751251316222, -5.8423495472521765, 0.7199618578596002],
    ],
    [
        [0.0036180446473613203, -0.024103035916204444, 0.07385149000504425, -0.1361712313119152, 0.16561765595445052, -0.13617123131191522, 0.07385149000504425, -0.02410303591620445, 0.0036180446473613203],
        [1.0, -7.422755489153113, 24.335391353145877, -46.00872953777965, 54.84888010016884, -42.21166170290168, 20.477340293866447, -5.724490967839785, 0.7060346266316733],
    ],
    [
        [0.0037044957779088054, -0.02417602922342101, 0.07297018102313461, -0.1332928687484785, 0.16160131675003286, -0.13329286874847854, 0.07297018102313464, -0.02417602922342102, 0.003704495777908808],
        [1.0, -7.374475462303056, 24.049762984834768, -45.28152450653979, 53.81862221126294, -41.33706216451481, 20.034159436993384, -5.601042321192412, 0.6915734587239474],
    ],
    [
        [0.003803345578401082, -0.024262397749703186, 0.07202730668640067, -0.13021416298927802, 0.15731204184350733, -0.13021416298927804, 0.07202730668640069, -0.024262397749703193, 0.0038033455784010827],
        [1.0, -7.321685046793338, 23.740270182361378, -44.49974787259481, 52.71879616262778, -40.4094474175734, 19.5671217403153, -5.4718622018245995, 0.6765758767772186],
    ],
    [
        [0.003916311450175029, -0.02436216774084731, 0.07101661463090722, -0.12692440200994706, 0.1527390407714409, -0.12692440200994706, 0.07101661463090721, -0.024362167740847308, 0.003916311450175028],
        [1.0, -7.2639298054721415, 23.4049476040813, -43.659746942842034, 51.54564324676603, -39.42652963497963, 19.075432859860893, -5.336825423683386, 0.6610417312101036],
    ],
    [
        [0.004045372714007112, -0.02447483970629536, 0.06993101477005573, -0.12341322396008846, 0.14787317504314582, -0.12341322396008848, 0.06993101477005575, -0.024474839706295364, 0.004045372714007114],
        [1.0, -7.200708568321025, 23.04170860921294, -42.75779047253804, 50.29547305301642, -38.386149420799114, 18.55837290327029, -5.195826800244247, 0.6449734712605839],
    ],
    [
        [0.004192818844869577, -0.024599183874128922, 0.0687625173304215, -0.11967087273269492, 0.14270756432823073, -0.11967087273269492, 0.0687625173304215, -0.024599183874128922, 0.004192818844869577],
        [1.0, -7.13146890911842, 22.648350607106035, -41.790115129396625, 48.964741666896614, -37.28633703013001, 18.01532049399321, -5.0487853718033815, 0.6283764250240628],
    ],
    [
        [0.004361308515649445, -0.02473297194791745, 0.06750220798008173, -0.11568849241595228, 0.1372383120692596, -0.11568849241595229, 0.06750220798008173, -0.02473297194791745, 0.0043613085156494445],
        [1.0, -7.055602285837572, 22.222564946368927, -40.75298628089075, 47.550147847515156, -36.125385180802546, 17.445780634791834, -4.895649096827127, 0.6112590856388208],
    ],
    [
        [0.004553942237596307, -0.024872625618104646, 0.06614028975968371, -0.11145845003783365, 0.13146537114446696, -0.11145845003783364, 0.0661402897596837, -0.02487262561810464, 0.0045539422375963055],
        [1.0, -6.9724388486802695, 21.76195264705139, -39.64277582925634, 46.04874966994444, -34.90193465069352, 16.849416668994927, -4.73640001564493, 0.593633400092261],
    ],
    [
        [0.004774352177036799, -0.025012755942172914, 0.06466623701294598, -0.10697466272037351, 0.1253935779480827, -0.10697466272037351, 0.06466623701294598, -0.025012755942172917, 0.004774352177036799],
        [1.0, -6.881241929826782, 21.264047568029238, -38.45606008225373, 44.45810409225115, -33.61507371389484, 16.226086582728886, -4.571059883105437, 0.575515056392652],
    ],
    [
        [0.005026813764885036, -0.025145559157670812, 0.06306912912666425, -0.10223288328364628, 0.11903389715261614, -0.10223288328364628, 0.06306912912666425, -0.025145559157670812, 0.005026813764885036],
        [1.0, -6.781202242488668, 20.726348941580518, -37.18974084009182, 42.77643171160547, -32.26445220470677, 15.575883803464404, -4.399696251440988, 0.5569237640873197],
    ],
    [
        [0.005316385080954152, -0.025260022904921905, 0.06133826477571707, -0.0972308624646319, 0.1124049441414676, -0.09723086246463189, 0.06133826477571707, -0.025260022904921905, 0.005316385080954152],
        [1.0, -6.67143183452569, 20.146365602803375, -35.84119294289222, 41.00280853930343, -30.850410568346156, 14.899182521027189, -4.222428964828426, 0.5378835223349034],
    ],
    [
        [0.005649081803319404, -0.02534088106066736, 0.05946420505243115, -0.09196824852707383, 0.10553489538711604, -0.09196824852707386, 0.05946420505243115, -0.02534088106066736, 0.005649081803319407],
        [1.0, -6.550957864759333, 19.52167469658061, -34.40844137743152, 39.13738586159708, -29.374123610401476, 14.196687377048237, -4.039437002257645, 0.5184228689937875],
    ],
    [
        [0.00603209792188605, -0.02536723380794972, 0.057440462864819436, -0.08644599431067883, 0.0984639714969061, -0.08644599431067881, 0.057440462864819415, -0.025367233807949727, 0.006032097921886048],
        [1.0, -6.418716299437366, 18.849998160357522, -32.890370573681, 37.181638054486115, -27.837757733341427, 13.469487127328039, -3.850965574531516, 0.49857510352568163],
    ],
    [
        [0.006474085644450311, -0.025310719924294844, 0.055266155728777966, -0.08066489965090624, 0.09124780348663568, -0.08066489965090624, 0.05526615572877795, -0.02531071992429484, 0.00647408564445031],
        [1.0, -6.273545663602149, 18.12930085406087, -31.2869675767803, 35.13863646211401, -26.24463917912155, 12.719111568452366, -3.6573333436667537, 0.4783784760108312],
    ],
    [
        [0.006985512280348404, -0.02513308735822771, 0.052950083164887404, -0.07462269613959145, 0.0839622021792713, -0.07462269613959145, 0.052950083164887383, -0.025133087358227692, 0.0069855122803484],
        [1.0, -6.114181029236459, 17.357914829568273, -29.599599152191008, 33.013344996075844, -24.59942910665292, 11.947590626160283, -3.4589395876971363, 0.4578763343416875],
    ],
    [
        [0.00757911780472208, -0.024782951442013777, 0.05051689804967341, -0.06830873978364209, 0.07671019388349279, -0.06830873978364209, 0.05051689804967341, -0.02478295144201377, 0.007579117804722077],
        [1.0, -5.9392484812379305, 16.534694881993456, -27.83132029967993, 30.81292983670049, -22.908299142821164, 11.157514022590975, -3.2562710797877195, 0.4371172218677802],
    ],
    [
        [0.008270504900994131, -0.02419145108470131, 0.048016342054057706, -0.06169485242232521, 0.06963274111733414, -0.06169485242232521, 0.04801634205405769, -0.024191451084701315, 0.008270504900994131],
        [1.0, -5.747260376193083, 15.659211170095936, -25.987207766087607, 28.547071417299705, -21.179098279455246, 10.352089373098455, -3.049908386212393, 0.4161549186452739],
    ],
    [
        [0.009078904430820055, -0.023266402738262845, 0.045536950269689624, -0.05472005025172613, 0.0629254560488116, -0.05472005025172612, 0.04553695026968962, -0.02326640273826283, 0.009078904430820052],
        [1.0, -5.536611800811432, 14.731985279196826, -24.07470651755242, 26.228261723781806, -19.421498580199426, 9.53519592238651, -2.840531211028877, 0.39504842135969],
    ],
    [
        [0.010028174758752294, -0.02188439649974867, 0.043226259725581105, -0.04726567580274949, 0.056865021482912344, -0.047265675802749464, 0.0432262597255811, -0.021884396499748653, 0.010028174758752288],
        [1.0, -5.305578750597338, 13.754776543941135, -22.10396921993906, 23.87206396864446, -17.647103065285382, 8.711430444235454, -2.6289223228002134, 0.37386186049308207],
    ],
    [
        [0.011148115007245671, -0.019880059127947484, 0.04132046880281075, -0.03911559677749232, 0.051851240212924865, -0.03911559677749232, 0.041320468802810734, -0.01988005912794748, 0.011148115007245671],
        [1.0, -5.052318689481604, 12.730925626774487, -20.088157944384275, 21.497305286597246, -15.869494344369933, 7.886141158609398, -2.4159694845299526, 0.3526643592721647],
    ],
    [
        [0.012476202838282326, -0.017031397000614297, 0.04018781799074283, -0.02989333712030856, 0.04847406060242253, -0.02989333712030856, 0.04018781799074284, -0.017031397000614297, 0.012476202838282326],
        [1.0, -4.774874323163803, 11.665762082908158, -18.043662846524892, 19.12616707003214, -14.104197090650384, 7.065444970926474, -2.2026646613898047, 0.33152984878053343],
    ],
    [
        [0.014059910743774627, -0.013039687196707344, 0.04039188435404654, -0.01896379826166927, 0.047620204467880976, -0.01896379826166926, 0.040391884354046524, -0.013039687196707344, 0.01405991074377462],
        [1.0, -4.471181629271509, 10.56708168178357, -15.990173718342046, 16.78413342256188, -12.368521345529599, 6.256223091483924, -1.9900995821976644, 0.3105368697067782],
    ],
    [
        [0.015959817032927356, -0.007501746872751343, 0.042783775789701765, -0.005280929446332946, 0.05064208454323312, -0.005280929446332932, 0.042783775789701765, -0.007501746872751339, 0.015959817032927356],
        [1.0, -4.139083443669143, 9.445697248635696, -13.950516413139034, 14.499758501236746, -10.681246953462256, 5.46609044743329, -1.779456443845456, 0.28976841755120436],
    ],
    [
        [0.018253817696513415, 0.00012850875846850352, 0.048636274907390545, 0.012846679603655034, 0.05962390721107926, 0.012846679603655039, 0.048636274907390566, 0.00012850875846850152, 0.018253817696513415],
        [1.0, -3.7763502130818623, 8.316063260022574, -11.95013680000185, 12.304222296517887, -9.062102075062498, 4.703335744996666, -1.5719921065413067, 0.2693119317245408],
    ],
    [
        [0.021042876738698778, 0.01059364275333596, 0.05983889533956738, 0.0381142211702392, 0.07779818503823577, 0.0381142211702392, 0.05983889533956737, 0.010593642753335962, 0.021042876738698774],
        [1.0, -3.3807098995586142, 7.1969687332709364, -10.016080318486079, 10.230667827569395, -7.530980287384556, 3.9768323785244535, -1.3690134095359912, 0.2492596022728786],
    ],
    [
        [0.02445894634313695, 0.024907772488285882, 0.07918141471516289, 0.0747655358466303, 0.11019314492376578, 0.07476553584663032, 0.07918141471516288, 0.02490777248828587, 0.02445894634313694],
        [1.0, -2.9498894730682403, 6.11228424757082, -8.175276722444021, 8.31335977440911, -6.106830022820237, 3.2959269419754627, -1.171840016473363, 0.2297092934684243],
    ],
    [
        [0.028675976912612946, 0.04446235584457851, 0.11076594737102331, 0.1294168144074489, 0.16463164065613062, 0.1294168144074489, 0.11076594737102329, 0.0444623558445785, 0.028675976912612932],
        [1.0, -2.481670965886537, 5.091736135690406, -6.451900557562709, 6.5867876511077075, -4.806134151989136, 2.670324096891808, -0.9817490592528928, 0.21076660277546397],
    ],
    [
        [0.0339253716762506, 0.07117608548520336, 0.16060574157535787, 0.21229493994335172, 0.25326050527665417, 0.21229493994335172, 0.16060574157535787, 0.07117608548520335, 0.03392537167625059],
        [1.0, -1.9739656962958994, 4.171662624387123, -4.863544918988305, 5.0849719326319125, -3.6408704249767347, 2.110007756033106, -0.7998920119769494, 0.19254896491967455],
    ],
    [
        [0.040517902326586336, 0.10770848117359293, 0.23749505706032098, 0.3390884306194931, 0.3948727760705877, 0.3390884306194931, 0.237495057060321, 0.10770848117359297, 0.04051790232658634],
        [1.0, -1.424911004823014, 3.395681327129579, -3.4159308531287347, 3.841438308635906, -2.6157938338716678, 1.6252754363120627, -0.6271672329556266, 0.17519342391072046],
    ],
    [
        [0.04887512131882825, 0.15776596138751, 0.3542720296950855, 0.5336965059170797, 0.6184023688243129, 0.5336965059170797, 0.35427202969508553, 0.15776596138751, 0.04887512131882826],
        [1.0, -0.8329946782379984, 2.8151631145021203, -2.0958969929337434, 2.8906226001215183, -1.7247892263171751, 1.2270265010247248, -0.4640186979786461, 0.15887102429234606],
    ],
    [
        [0.059574894440855966, 0.22654285402648067, 0.5296497445069142, 0.8322823289298178, 0.9681305396364496, 0.8322823289298176, 0.5296497445069142, 0.2265428540264806, 0.059574894440855966],
        [1.0, -0.197213137457387, 2.489362028874504, -0.8625046468287766, 2.271867828573883, -0.945871971614195, 0.9275556223030523, -0.31010731975838124, 0.14381330273441373],
    ],
    [
        [0.07341817993305122, 0.32136016720838667, 0.7908651305701571, 1.289196592865987, 1.5113521629297662, 1.289196592865987, 0.790865130570157, 0.32136016720838667, 0.0734181799330512],
        [1.0, 0.48272962922812884, 2.484992825893145, 0.3637004270998043, 2.0376606015715173, -0.23411139604621434, 0.7422948305385719, -0.1637556705611563, 0.130361288868968],
    ],
];

/// 8th-order elliptic lowpass sections for a 22050 Hz stream,
/// one per MIDI pitch.
pub(crate) static MIDI_ELLIPTIC_22050: MidiTable = [
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.003094862563763469, -0.024541547772543113, 0.08535538621680425, -0.17006539707486645, 0.2123133921693989, -0.17006539707486648, 0.08535538621680426, -0.024541547772543113, 0.003094862563763469],
        [1.0, -7.916463294351019, 27.428966150503147, -54.327253052728665, 67.27805000494754, -53.342774716272416, 26.443791670832784, -7.493747789269431, 0.9294310263758947],
    ],
    [
        [0.0030937977978379404, -0.024506769356689318, 0.0851688743752498, -0.16961531143807881, 0.2117188172999331, -0.16961531143807876, 0.08516887437524978, -0.024506769356689308, 0.0030937977978379386],
        [1.0, -7.910847328485176, 27.391379671132015, -54.219508871332366, 67.10658380518024, -53.17918010088823, 26.35022515872652, -7.464047602809988, 0.9253952685369297],
    ],
    [
        [0.003093018757284575, -0.02447111565263513, 0.08497161828499264, -0.1691346948186758, 0.21108234694766576, -0.16913469481867577, 0.08497161828499263, -0.02447111565263513, 0.0030930187572845744],
        [1.0, -7.904818479849409, 27.35112304198617, -54.10438226037044, 66.92381114673229, -53.00523155708837, 26.250993043835503, -7.432633589300558, 0.9211386541497257],
    ],
    [
        [0.0030925832610728837, -0.024434669233297204, 0.08476301395365603, -0.16862131188675653, 0.210400767952535, -0.1686213118867565, 0.08476301395365603, -0.024434669233297204, 0.0030925832610728845],
        [1.0, -7.898342625913733, 27.30798607895084, -53.98132217974472, 66.72893646326975, -52.82024772657863, 26.1457504442624, -7.399410747717047, 0.9166502936214336],
    ],
    [
        [0.0030925572683507875, -0.024397531797577938, 0.08454242391576917, -0.1680727509935054, 0.20967060343858052, -0.16807275099350544, 0.08454242391576922, -0.02439753179757794, 0.0030925572683507875],
        [1.0, -7.891382461946666, 27.261740179530243, -53.84973255826303, 66.52110424471638, -52.62350076174988, 26.03413181425892, -7.36427936275904, 0.9119189064510397],
    ],
    [
        [0.00309301589795868, -0.02435982659293193, 0.08430917509920201, -0.16748640992718355, 0.20888809140156098, -0.16748640992718355, 0.08430917509920201, -0.02435982659293193, 0.00309301589795868],
        [1.0, -7.883897174360738, 27.212136578688778, -53.708968403187484, 66.29939439972046, -52.41421321768197, 25.91574984486287, -7.327134853793456, 0.9069328261282696],
    ],
    [
        [0.0030940445704372575, -0.02432170104659124, 0.08406255644227179, -0.16685948066452289, 0.20804916195975554, -0.16685948066452289, 0.08406255644227179, -0.024321701046591242, 0.003094044570437259],
        [1.0, -7.875842078573238, 27.158904437156934, -53.55833158777642, 66.06281730264473, -52.19155478931066, 25.790194341220857, -7.28786763295032, 0.9016800081844225],
    ],
    [
        [0.00309574028764002, -0.024283329606530762, 0.0838018162075974, -0.16618893309756252, 0.20714941330862438, -0.16618893309756252, 0.08380181620759738, -0.02428332960653076, 0.003095740287640019],
        [1.0, -7.867168217464156, 27.101748747696963, -53.39706629822416, 65.81030851911493, -51.95463890137765, 25.65703108481782, -7.246362975450869, 0.8961480418308309],
    ],
    [
        [0.0030982130671922403, -0.024244916787847213, 0.08352615892556299, -0.16547149773114866, 0.20618408646218137, -0.16547149773114864, 0.08352615892556298, -0.02424491678784721, 0.0030982130671922395],
        [1.0, -7.85782191609236, 27.04034804409924, -53.224354122717855, 65.54072320872986, -51.70251916362083, 25.515800691207794, -7.202500905772415, 0.890324165659801],
    ],
    [
        [0.00310158755155189, -0.02420670041293115, 0.08323474188403522, -0.16470364736662949, 0.20514803891811062, -0.1647036473666295, 0.08323474188403523, -0.02420670041293115, 0.0031015875515518895],
        [1.0, -7.847744287869239, 26.97435189708037, -53.039308767493324, 65.25283020959942, -51.434185709712324, 25.366017476685396, -7.156156103851339, 0.8841952879233476],
    ],
    [
        [0.0031060048144102275, -0.024168955024115483, 0.08292667106115933, -0.1638815778139369, 0.2040357174524115, -0.1638815778139369, 0.08292667106115933, -0.02416895502411548, 0.003106004814410227],
        [1.0, -7.836870686883497, 26.903378180836505, -52.84097038801592, 64.94530581727399, -51.14856144594746, 25.207168350728377, -7.10719783620174, 0.8777480119461977],
    ],
    [
        [0.0031116243907290627, -0.024131995434747297, 0.08260099637398417, -0.16300118770875346, 0.20284113033575754, -0.1630011877087535, 0.08260099637398417, -0.024131995434747297, 0.0031116243907290636],
        [1.0, -7.825130100518919, 26.82701009384907, -52.62829952803061, 64.61672728077528, -50.84449824491409, 25.03871175506852, -7.055489917591537, 0.8709686672709973],
    ],
    [
        [0.00311862656098334, -0.02409618036804176, 0.08225670608659787, -0.16205805755560632, 0.20155781937132095, -0.1620580575556063, 0.08225670608659783, -0.024096180368041748, 0.003118626560983338],
        [1.0, -7.812444475906389, 26.744792917742004, -52.40017066557027, 64.26556605132083, -50.52077313064782, 24.860076675006667, -7.000890709777808, 0.8638433471745385],
    ],
    [
        [0.0031272149253322996, -0.02406191611162233, 0.08189272018661875, -0.1610474281736525, 0.20017883228663474, -0.16104742817365247, 0.08189272018661872, -0.024061916111622325, 0.0031272149253322988],
        [1.0, -7.798727973099938, 26.656230498673537, -52.155365373511536, 63.890180835524305, -50.176084515473335, 24.670661754185986, -6.943253164766274, 0.8563579532332362],
    ],
    [
        [0.0031376193096942485, -0.024029660088044302, 0.08150788249748558, -0.15996417879216795, 0.19869669617473826, -0.15996417879216793, 0.08150788249748557, -0.024029660088044295, 0.0031376193096942476],
        [1.0, -7.78388613716321, 26.56078143706939, -51.8925651134487, 63.48881052503626, -49.80904856527404, 24.46983455059585, -6.882424921134568, 0.8484982476529699],
    ],
    [
        [0.0031500990533191156, -0.023999924206218687, 0.08110095124530865, -0.15880280513034797, 0.19710339287756878, -0.15880280513034797, 0.08110095124530865, -0.023999924206218683, 0.0031500990533191147],
        [1.0, -7.767814980596656, 26.457854973662048, -51.610343696137775, 63.05956709954218, -49.418195789788584, 24.256930979221394, -6.81824846315003, 0.8402499141112366],
    ],
    [
        [0.003164946736779404, -0.023973277813437444, 0.08067058774250836, -0.15755739790446605, 0.1953903374429516, -0.15755739790446602, 0.08067058774250835, -0.02397327781343744, 0.0031649467367794028],
        [1.0, -7.750399966727792, 26.346806563038584, -51.307159460302, 62.60042863067717, -49.00196797824361, 24.031254995619907, -6.750561353726452, 0.8315986278868355],
    ],
    [
        [0.00318249242076368, -0.023950350010032578, 0.08021534278588402, -0.15622162233880535, 0.19354836107169893, -0.15622162233880535, 0.08021534278588402, -0.023950350010032578, 0.003182492420763679],
        [1.0, -7.731514883829902, 26.22693313052038, -50.98134724507498, 62.10923255178804, -48.55871562877539, 23.792078584931488, -6.679196553701798, 0.8225301360719588],
    ],
    [
        [0.0032031084801995274, -0.023931831015232694, 0.0797336402945247, -0.15478869941966833, 0.1915677003095212, -0.15478869941966833, 0.0797336402945247, -0.02393183101523269, 0.0032031084801995274],
        [1.0, -7.711020598832607, 26.097468014579057, -50.63111026084728, 61.583669403757455, -48.086696053302994, 23.53864213256131, -6.603982841480015, 0.813030348671359],
    ],
    [
        [0.0032272151357414813, -0.02391847217922239, 0.07922375763453211, -0.1532513898292806, 0.1894379946359222, -0.1532513898292806, 0.07922375763453211, -0.023918472179222394, 0.0032272151357414813],
        [1.0, -7.688763678549323, 25.95757560559766, -50.25451200001562, 61.02127732162428, -47.58407237845715, 23.270155266136364, -6.5247453487590175, 0.8030854413905256],
    ],
    [
        [0.003255286806402998, -0.023911084117238402, 0.07868380199593791, -0.1516019817339658, 0.18714829506478048, -0.15160198173396583, 0.07868380199593793, -0.023911084117238406, 0.0032552868064029987],
        [1.0, -7.664574865382608, 25.806345703185784, -49.84946837455229, 60.41943759193387, -47.048913708518455, 22.9857982734595, -6.44130622985162, 0.7926819708964498],
    ],
    [
        [0.0032878594341941153, -0.02391053228961127, 0.07811168210805303, -0.1498322838840067, 0.18468708690373362, -0.1498322838840067, 0.078111682108053, -0.023910532289611267, 0.0032878594341941153],
        [1.0, -7.638267393495845, 25.642787629150902, -49.413740323079956, 59.77537168819519, -46.47919676874196, 22.684724218150638, -6.353485483977968, 0.7818070032972161],
    ],
    [
        [0.0033255389654507023, -0.023917729157695525, 0.07750507451216335, -0.14793362581588657, 0.18204233042489776, -0.14793362581588657, 0.07750507451216335, -0.023917729157695515, 0.003325538965450701],
        [1.0, -7.609635130481154, 25.465824152467157, -48.94492719813779, 59.086140283117174, -45.872809407529374, 22.36606189351989, -6.261101951835702, 0.7704482565263151],
    ],
    [
        [0.0033690112158971776, -0.023933621797511122, 0.07686138357008826, -0.14589686733423152, 0.17920152387864305, -0.14589686733423152, 0.07686138357008823, -0.023933621797511115, 0.0033690112158971768],
        [1.0, -7.5784505286401345, 25.27428530720375, -48.440461326674, 58.34864484305716, -45.22755640411934, 22.02891977594026, -6.163974509695817, 0.7585942572300572],
    ],
    [
        [0.0034190533996584093, -0.023959173534735784, 0.07617769439709123, -0.14371241989021788, 0.1761517940325942, -0.14371241989021785, 0.07617769439709121, -0.023959173534735777, 0.003419053399658409],
        [1.0, -7.5444623691671096, 25.06690221562993, -47.89760423581008, 57.55963253382062, -44.54116810502432, 21.672391161456023, -6.0619234861685936, 0.7462345126370327],
    ],
    [
        [0.003476547669360566, -0.0239953377554714, 0.07545071800371454, -0.14137028295839038, 0.17288002023355004, -0.14137028295839035, 0.07545071800371451, -0.023995337755471385, 0.0034765476693605643],
        [1.0, -7.507393281838263, 24.842301068109823, -47.31344515405566, 56.71570530879385, -43.811312497215276, 21.295560693320148, -5.954772328556008, 0.7333596977321966],
    ],
    [
        [0.0035424970989075782, -0.0240430215191671, 0.07467672816684891, -0.13886009902617294, 0.16937299886086948, -0.13886009902617294, 0.07467672816684894, -0.024043021519167096, 0.003542497098907579],
        [1.0, -7.46693702233463, 24.59899746074319, -46.6849025379299, 55.81333421103339, -43.03561141836872, 20.89751251316222, -5.8423495472521765, 0.7199618578596002],
    ],
    [
        [0.0036180446473613203, -0.024103035916204444, 0.07385149000504425, -0.1361712313119152, 0.16561765595445052, -0.13617123131191522, 0.07385149000504425, -0.02410303591620445, 0.0036180446473613203],
        [1.0, -7.422755489153113, 24.335391353145877, -46.00872953777965, 54.84888010016884, -42.21166170290168, 20.477340293866447, -5.724490967839785, 0.7060346266316733],
    ],
    [
        [0.0037044957779088054, -0.02417602922342101, 0.07297018102313461, -0.1332928687484785, 0.16160131675003286, -0.13329286874847854, 0.07297018102313464, -0.02417602922342102, 0.003704495777908808],
        [1.0, -7.374475462303056, 24.049762984834768, -45.28152450653979, 53.81862221126294, -41.33706216451481, 20.034159436993384, -5.601042321192412, 0.6915734587239474],
    ],
    [
        [0.003803345578401083, -0.02426239774970319, 0.07202730668640067, -0.130214162989278, 0.15731204184350728, -0.130214162989278, 0.07202730668640067, -0.02426239774970319, 0.0038033455784010827],
        [1.0, -7.321685046793338, 23.740270182361378, -44.49974787259481, 52.71879616262778, -40.409447417573396, 19.5671217403153, -5.4718622018246, 0.6765758767772188],
    ],
    [
        [0.003916311450175029, -0.02436216774084731, 0.07101661463090722, -0.12692440200994706, 0.1527390407714409, -0.12692440200994706, 0.07101661463090721, -0.024362167740847308, 0.003916311450175028],
        [1.0, -7.2639298054721415, 23.4049476040813, -43.659746942842034, 51.54564324676603, -39.42652963497963, 19.075432859860893, -5.336825423683386, 0.6610417312101036],
    ],
    [
        [0.004045372714007112, -0.02447483970629536, 0.06993101477005574, -0.12341322396008846, 0.14787317504314582, -0.12341322396008846, 0.06993101477005574, -0.024474839706295364, 0.004045372714007113],
        [1.0, -7.200708568321025, 23.041708609212943, -42.75779047253805, 50.29547305301642, -38.38614942079912, 18.558372903270296, -5.195826800244248, 0.644973471260584],
    ],
    [
        [0.004192818844869577, -0.024599183874128922, 0.0687625173304215, -0.11967087273269492, 0.14270756432823073, -0.11967087273269492, 0.0687625173304215, -0.024599183874128922, 0.004192818844869577],
        [1.0, -7.13146890911842, 22.648350607106035, -41.790115129396625, 48.964741666896614, -37.28633703013001, 18.01532049399321, -5.0487853718033815, 0.6283764250240628],
    ],
    [
        [0.004361308515649445, -0.02473297194791745, 0.06750220798008173, -0.11568849241595228, 0.1372383120692596, -0.11568849241595229, 0.06750220798008173, -0.02473297194791745, 0.0043613085156494445],
        [1.0, -7.055602285837572, 22.222564946368927, -40.75298628089075, 47.550147847515156, -36.125385180802546, 17.445780634791834, -4.895649096827127, 0.6112590856388208],
    ],
    [
        [0.004553942237596307, -0.024872625618104646, 0.06614028975968371, -0.11145845003783365, 0.13146537114446696, -0.11145845003783364, 0.0661402897596837, -0.02487262561810464, 0.0045539422375963055],
        [1.0, -6.9724388486802695, 21.76195264705139, -39.64277582925634, 46.04874966994444, -34.90193465069352, 16.849416668994927, -4.73640001564493, 0.593633400092261],
    ],
    [
        [0.004774352177036799, -0.025012755942172914, 0.06466623701294598, -0.10697466272037351, 0.1253935779480827, -0.10697466272037351, 0.06466623701294598, -0.025012755942172917, 0.004774352177036799],
        [1.0, -6.881241929826782, 21.264047568029238, -38.45606008225373, 44.45810409225115, -33.61507371389484, 16.226086582728886, -4.571059883105437, 0.575515056392652],
    ],
    [
        [0.005026813764885036, -0.025145559157670812, 0.06306912912666425, -0.10223288328364628, 0.11903389715261614, -0.10223288328364628, 0.06306912912666425, -0.025145559157670812, 0.005026813764885036],
        [1.0, -6.781202242488668, 20.726348941580518, -37.18974084009182, 42.77643171160547, -32.26445220470677, 15.575883803464404, -4.399696251440988, 0.5569237640873197],
    ],
    [
        [0.005316385080954152, -0.025260022904921905, 0.06133826477571707, -0.0972308624646319, 0.1124049441414676, -0.09723086246463189, 0.06133826477571707, -0.025260022904921905, 0.005316385080954152],
        [1.0, -6.67143183452569, 20.146365602803375, -35.84119294289222, 41.00280853930343, -30.850410568346156, 14.899182521027189, -4.222428964828426, 0.5378835223349034],
    ],
    [
        [0.005649081803319404, -0.02534088106066736, 0.05946420505243115, -0.09196824852707383, 0.10553489538711604, -0.09196824852707386, 0.05946420505243115, -0.02534088106066736, 0.005649081803319407],
        [1.0, -6.550957864759333, 19.52167469658061, -34.40844137743152, 39.13738586159708, -29.374123610401476, 14.196687377048237, -4.039437002257645, 0.5184228689937875],
    ],
    [
        [0.00603209792188605, -0.02536723380794972, 0.057440462864819436, -0.08644599431067883, 0.0984639714969061, -0.08644599431067881, 0.057440462864819415, -0.025367233807949727, 0.006032097921886048],
        [1.0, -6.418716299437366, 18.849998160357522, -32.890370573681, 37.181638054486115, -27.837757733341427, 13.469487127328039, -3.850965574531516, 0.49857510352568163],
    ],
    [
        [0.006474085644450311, -0.025310719924294844, 0.055266155728777966, -0.08066489965090624, 0.09124780348663568, -0.08066489965090624, 0.05526615572877795, -0.02531071992429484, 0.00647408564445031],
        [1.0, -6.273545663602149, 18.12930085406087, -31.2869675767803, 35.13863646211401, -26.24463917912155, 12.719111568452366, -3.6573333436667537, 0.4783784760108312],
    ],
    [
        [0.006985512280348404, -0.02513308735822771, 0.052950083164887404, -0.07462269613959145, 0.0839622021792713, -0.07462269613959145, 0.052950083164887383, -0.025133087358227692, 0.0069855122803484],
        [1.0, -6.114181029236459, 17.357914829568273, -29.599599152191008, 33.013344996075844, -24.59942910665292, 11.947590626160283, -3.4589395876971363, 0.4578763343416875],
    ],
    [
        [0.00757911780472208, -0.024782951442013777, 0.05051689804967341, -0.06830873978364209, 0.07671019388349279, -0.06830873978364209, 0.05051689804967341, -0.02478295144201377, 0.007579117804722077],
        [1.0, -5.9392484812379305, 16.534694881993456, -27.83132029967993, 30.81292983670049, -22.908299142821164, 11.157514022590975, -3.2562710797877195, 0.4371172218677802],
    ],
    [
        [0.008270504900994131, -0.02419145108470131, 0.048016342054057706, -0.06169485242232521, 0.06963274111733414, -0.06169485242232521, 0.04801634205405769, -0.024191451084701315, 0.008270504900994131],
        [1.0, -5.747260376193083, 15.659211170095936, -25.987207766087607, 28.547071417299705, -21.179098279455246, 10.352089373098455, -3.049908386212393, 0.4161549186452739],
    ],
    [
        [0.009078904430820055, -0.023266402738262845, 0.045536950269689624, -0.05472005025172613, 0.0629254560488116, -0.05472005025172612, 0.04553695026968962, -0.02326640273826283, 0.009078904430820052],
        [1.0, -5.536611800811432, 14.731985279196826, -24.07470651755242, 26.228261723781806, -19.421498580199426, 9.53519592238651, -2.840531211028877, 0.39504842135969],
    ],
    [
        [0.010028174758752294, -0.02188439649974867, 0.043226259725581105, -0.04726567580274949, 0.056865021482912344, -0.047265675802749464, 0.0432262597255811, -0.021884396499748653, 0.010028174758752288],
        [1.0, -5.305578750597338, 13.754776543941135, -22.10396921993906, 23.87206396864446, -17.647103065285382, 8.711430444235454, -2.6289223228002134, 0.37386186049308207],
    ],
    [
        [0.011148115007245671, -0.019880059127947484, 0.04132046880281075, -0.03911559677749232, 0.051851240212924865, -0.03911559677749232, 0.041320468802810734, -0.01988005912794748, 0.011148115007245671],
        [1.0, -5.052318689481604, 12.730925626774487, -20.088157944384275, 21.497305286597246, -15.869494344369933, 7.886141158609398, -2.4159694845299526, 0.3526643592721647],
    ],
    [
        [0.012476202838282326, -0.017031397000614297, 0.04018781799074283, -0.02989333712030856, 0.04847406060242253, -0.02989333712030856, 0.04018781799074284, -0.017031397000614297, 0.012476202838282326],
        [1.0, -4.774874323163803, 11.665762082908158, -18.043662846524892, 19.12616707003214, -14.104197090650384, 7.065444970926474, -2.2026646613898047, 0.33152984878053343],
    ],
    [
        [0.014059910743774627, -0.013039687196707344, 0.04039188435404654, -0.01896379826166927, 0.047620204467880976, -0.01896379826166926, 0.040391884354046524, -0.013039687196707344, 0.01405991074377462],
        [1.0, -4.471181629271509, 10.56708168178357, -15.990173718342046, 16.78413342256188, -12.368521345529599, 6.256223091483924, -1.9900995821976644, 0.3105368697067782],
    ],
    [
        [0.015959817032927356, -0.0075017468727513305, 0.04278377578970175, -0.005280929446332921, 0.05064208454323311, -0.005280929446332893, 0.042783775789701765, -0.0075017468727513244, 0.015959817032927356],
        [1.0, -4.139083443669142, 9.445697248635692, -13.950516413139031, 14.499758501236741, -10.681246953462253, 5.466090447433287, -1.7794564438454552, 0.2897684175512042],
    ],
    [
        [0.018253817696513384, 0.00012850875846838982, 0.04863627490739046, 0.012846679603654761, 0.05962390721107911, 0.012846679603654773, 0.04863627490739049, 0.00012850875846839185, 0.01825381769651339],
        [1.0, -3.7763502130818685, 8.316063260022592, -11.950136800001879, 12.304222296517917, -9.06210207506252, 4.703335744996679, -1.57199210654131, 0.2693119317245412],
    ],
    [
        [0.021042876738698778, 0.01059364275333596, 0.05983889533956738, 0.0381142211702392, 0.07779818503823577, 0.0381142211702392, 0.05983889533956737, 0.010593642753335962, 0.021042876738698774],
        [1.0, -3.3807098995586142, 7.1969687332709364, -10.016080318486079, 10.230667827569395, -7.530980287384556, 3.9768323785244535, -1.3690134095359912, 0.2492596022728786],
    ],
    [
        [0.02445894634313695, 0.024907772488285882, 0.07918141471516289, 0.0747655358466303, 0.11019314492376578, 0.07476553584663032, 0.07918141471516288, 0.02490777248828587, 0.02445894634313694],
        [1.0, -2.9498894730682403, 6.11228424757082, -8.175276722444021, 8.31335977440911, -6.106830022820237, 3.2959269419754627, -1.171840016473363, 0.2297092934684243],
    ],
    [
        [0.028675976912612946, 0.04446235584457845, 0.11076594737102323, 0.1294168144074487, 0.16463164065613042, 0.12941681440744868, 0.1107659473710232, 0.04446235584457842, 0.028675976912612932],
        [1.0, -2.4816709658865403, 5.091736135690413, -6.45190055756272, 6.586787651107717, -4.806134151989141, 2.67032409689181, -0.9817490592528934, 0.210766602775464],
    ],
    [
        [0.0339253716762506, 0.07117608548520336, 0.16060574157535787, 0.21229493994335172, 0.25326050527665417, 0.21229493994335172, 0.16060574157535787, 0.07117608548520335, 0.03392537167625059],
        [1.0, -1.9739656962958994, 4.171662624387123, -4.863544918988305, 5.0849719326319125, -3.6408704249767347, 2.110007756033106, -0.7998920119769494, 0.19254896491967455],
    ],
    [
        [0.040517902326586405, 0.10770848117359326, 0.23749505706032162, 0.33908843061949423, 0.3948727760705888, 0.3390884306194941, 0.23749505706032156, 0.10770848117359325, 0.0405179023265864],
        [1.0, -1.4249110048230103, 3.3956813271295747, -3.4159308531287262, 3.8414383086358987, -2.6157938338716615, 1.62527543631206, -0.6271672329556255, 0.17519342391072043],
    ],
    [
        [0.04887512131882825, 0.15776596138750992, 0.3542720296950853, 0.5336965059170795, 0.6184023688243125, 0.5336965059170795, 0.35427202969508537, 0.15776596138750995, 0.04887512131882826],
        [1.0, -0.832994678238, 2.815163114502121, -2.0958969929337465, 2.89062260012152, -1.724789226317177, 1.2270265010247254, -0.4640186979786464, 0.15887102429234612],
    ],
    [
        [0.059574894440855966, 0.22654285402648067, 0.5296497445069142, 0.8322823289298178, 0.9681305396364496, 0.8322823289298176, 0.5296497445069142, 0.2265428540264806, 0.059574894440855966],
        [1.0, -0.197213137457387, 2.489362028874504, -0.8625046468287766, 2.271867828573883, -0.945871971614195, 0.9275556223030523, -0.31010731975838124, 0.14381330273441373],
    ],
    [
        [0.0734181799330512, 0.3213601672083867, 0.7908651305701572, 1.2891965928659872, 1.5113521629297664, 1.2891965928659872, 0.7908651305701572, 0.32136016720838667, 0.0734181799330512],
        [1.0, 0.48272962922813006, 2.484992825893144, 0.36370042709980677, 2.0376606015715155, -0.23411139604621306, 0.742294830538571, -0.16375567056115603, 0.13036128886896786],
    ],
    [
        [0.09152816579793671, 0.4525951231800016, 1.177496035209378, 1.9855379026144373, 2.3495030895206743, 1.9855379026144366, 1.177496035209378, 0.45259512318000156, 0.09152816579793667],
        [1.0, 1.2061746065447663, 2.874975896703981, 1.7128384775262602, 2.2682503134796463, 0.4887621438034669, 0.6932813250306931, -0.02097990709753096, 0.11905724851437254],
    ],
    [
        [0.11549927133587232, 0.6350386148386674, 1.7469257854251448, 3.041338638133884, 3.634013532678687, 3.0413386381338823, 1.7469257854251439, 0.6350386148386671, 0.11549927133587225],
        [1.0, 1.9712033874970636, 3.7359837951812325, 3.3781570660800457, 3.0950982467775057, 1.3501227224662664, 0.8157065478701118, 0.1262451017730005, 0.11081946340106466],
    ],
    [
        [0.14762378549788463, 0.8898802392249899, 2.582080065688304, 4.632540991251867, 5.588318414024472, 4.632540991251867, 2.5820800656883036, 0.8898802392249897, 0.14762378549788457],
        [1.0, 2.7742678383021397, 5.1443239194051955, 5.626616028327136, 4.735265820789652, 2.5508202664011863, 1.1698916764271339, 0.2931676897213614, 0.1072823249194959],
    ],
    [
        [0.1912401383846968, 1.2476016994660015, 3.802168623406017, 7.013861487474295, 8.53723541580991, 7.013861487474295, 3.802168623406018, 1.2476016994660015, 0.19124013838469678],
        [1.0, 3.609741658781746, 7.169566851912172, 8.803706807159102, 7.536974287506721, 4.402788223740848, 1.86267840365903, 0.5082056346621985, 0.11147407601827582],
    ],
    [
        [0.2512709460757572, 1.7521383145377685, 5.577049258040684, 10.547801869502575, 12.943574182974151, 10.547801869502575, 5.577049258040683, 1.7521383145377682, 0.2512709460757572],
        [1.0, 4.469365715113051, 9.86511389218322, 13.325933925889354, 12.03144769493236, 7.385334723077518, 3.0847733927888585, 0.8242122519704437, 0.12920226874705093],
    ],
    [
        [0.33504796293571987, 2.4666387597789163, 8.14490031181777, 15.736980083834366, 19.447405497757135, 15.736980083834366, 8.14490031181777, 2.4666387597789163, 0.3350479629357198],
        [1.0, 5.3414883122678205, 13.254310214268585, 19.649828474572022, 18.974561438439544, 12.223079488694427, 5.173881603498221, 1.3399637394316146, 0.17195918965680668],
    ],
    [
        [0.45352328600886443, 3.4805799895364102, 11.829201125361845, 23.247307553249716, 28.890332021308602, 23.247307553249712, 11.829201125361841, 3.4805799895364085, 0.4535232860088642],
        [1.0, 6.209720059723024, 17.30870755677845, 28.19721400091958, 29.33716375656389, 19.97453181300971, 8.715118963671454, 2.240855572543424, 0.26315215974301764],
    ],
    [
        [0.6227776841234227, 4.915187317199092, 17.0379983710653, 33.87971846479065, 42.26825954660603, 33.87971846479064, 17.037998371065296, 4.91518731719909, 0.6227776841234222],
        [1.0, 7.049569112338632, 21.908100216828092, 39.193958530864194, 44.149272006208534, 32.070776689721356, 14.678331385644622, 3.8729779460580787, 0.4516080807497132],
    ],
    [
        [0.7042492743008238, 5.595847322158514, 19.490793593143987, 38.868532239932264, 48.53867339600887, 38.868532239932264, 19.49079359314398, 5.595847322158511, 0.7042492743008234],
        [1.0, 7.351487533237439, 23.7334715666807, 43.94729005942437, 51.052776432518094, 38.10320082840874, 17.84534704210253, 4.796139898128623, 0.5665254019807355],
    ],
    [
        [0.7042492743008238, 5.595847322158514, 19.490793593143987, 38.868532239932264, 48.53867339600887, 38.868532239932264, 19.49079359314398, 5.595847322158511, 0.7042492743008234],
        [1.0, 7.351487533237439, 23.7334715666807, 43.94729005942437, 51.052776432518094, 38.10320082840874, 17.84534704210253, 4.796139898128623, 0.5665254019807355],
    ],
    [
        [0.7042492743008238, 5.595847322158514, 19.490793593143987, 38.868532239932264, 48.53867339600887, 38.868532239932264, 19.49079359314398, 5.595847322158511, 0.7042492743008234],
        [1.0, 7.351487533237439, 23.7334715666807, 43.94729005942437, 51.052776432518094, 38.10320082840874, 17.84534704210253, 4.796139898128623, 0.5665254019807355],
    ],
    [
        [0.7042492743008238, 5.595847322158514, 19.490793593143987, 38.868532239932264, 48.53867339600887, 38.868532239932264, 19.49079359314398, 5.595847322158511, 0.7042492743008234],
        [1.0, 7.351487533237439, 23.7334715666807, 43.94729005942437, 51.052776432518094, 38.10320082840874, 17.84534704210253, 4.796139898128623, 0.5665254019807355],
    ],
];

/// 8th-order elliptic lowpass sections for a 11025 Hz stream,
/// one per MIDI pitch.
pub(crate) static MIDI_ELLIPTIC_11025: MidiTable = [
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.003094862563763469, -0.024541547772543113, 0.08535538621680425, -0.17006539707486645, 0.2123133921693989, -0.17006539707486648, 0.08535538621680426, -0.024541547772543113, 0.003094862563763469],
        [1.0, -7.916463294351019, 27.428966150503147, -54.327253052728665, 67.27805000494754, -53.342774716272416, 26.443791670832784, -7.493747789269431, 0.9294310263758947],
    ],
    [
        [0.0030937977978379404, -0.024506769356689318, 0.0851688743752498, -0.16961531143807881, 0.2117188172999331, -0.16961531143807876, 0.08516887437524978, -0.024506769356689308, 0.0030937977978379386],
        [1.0, -7.910847328485176, 27.391379671132015, -54.219508871332366, 67.10658380518024, -53.17918010088823, 26.35022515872652, -7.464047602809988, 0.9253952685369297],
    ],
    [
        [0.003093018757284575, -0.02447111565263513, 0.08497161828499264, -0.1691346948186758, 0.21108234694766576, -0.16913469481867577, 0.08497161828499263, -0.02447111565263513, 0.0030930187572845744],
        [1.0, -7.904818479849409, 27.35112304198617, -54.10438226037044, 66.92381114673229, -53.00523155708837, 26.250993043835503, -7.432633589300558, 0.9211386541497257],
    ],
    [
        [0.0030925832610728837, -0.024434669233297204, 0.08476301395365603, -0.16862131188675653, 0.210400767952535, -0.1686213118867565, 0.08476301395365603, -0.024434669233297204, 0.0030925832610728845],
        [1.0, -7.898342625913733, 27.30798607895084, -53.98132217974472, 66.72893646326975, -52.82024772657863, 26.1457504442624, -7.399410747717047, 0.9166502936214336],
    ],
    [
        [0.0030925572683507875, -0.024397531797577938, 0.08454242391576917, -0.1680727509935054, 0.20967060343858052, -0.16807275099350544, 0.08454242391576922, -0.02439753179757794, 0.0030925572683507875],
        [1.0, -7.891382461946666, 27.261740179530243, -53.84973255826303, 66.52110424471638, -52.62350076174988, 26.03413181425892, -7.36427936275904, 0.9119189064510397],
    ],
    [
        [0.00309301589795868, -0.02435982659293193, 0.08430917509920201, -0.16748640992718355, 0.20888809140156098, -0.16748640992718355, 0.08430917509920201, -0.02435982659293193, 0.00309301589795868],
        [1.0, -7.883897174360738, 27.212136578688778, -53.708968403187484, 66.29939439972046, -52.41421321768197, 25.91574984486287, -7.327134853793456, 0.9069328261282696],
    ],
    [
        [0.0030940445704372575, -0.02432170104659124, 0.08406255644227179, -0.16685948066452289, 0.20804916195975554, -0.16685948066452289, 0.08406255644227179, -0.024321701046591242, 0.003094044570437259],
        [1.0, -7.875842078573238, 27.158904437156934, -53.55833158777642, 66.06281730264473, -52.19155478931066, 25.790194341220857, -7.28786763295032, 0.9016800081844225],
    ],
    [
        [0.00309574028764002, -0.024283329606530762, 0.0838018162075974, -0.16618893309756252, 0.20714941330862438, -0.16618893309756252, 0.08380181620759738, -0.02428332960653076, 0.003095740287640019],
        [1.0, -7.867168217464156, 27.101748747696963, -53.39706629822416, 65.81030851911493, -51.95463890137765, 25.65703108481782, -7.246362975450869, 0.8961480418308309],
    ],
    [
        [0.0030982130671922403, -0.024244916787847213, 0.08352615892556299, -0.16547149773114866, 0.20618408646218137, -0.16547149773114864, 0.08352615892556298, -0.02424491678784721, 0.0030982130671922395],
        [1.0, -7.85782191609236, 27.04034804409924, -53.224354122717855, 65.54072320872986, -51.70251916362083, 25.515800691207794, -7.202500905772415, 0.890324165659801],
    ],
    [
        [0.00310158755155189, -0.02420670041293115, 0.08323474188403522, -0.16470364736662949, 0.20514803891811062, -0.1647036473666295, 0.08323474188403523, -0.02420670041293115, 0.0031015875515518895],
        [1.0, -7.847744287869239, 26.97435189708037, -53.039308767493324, 65.25283020959942, -51.434185709712324, 25.366017476685396, -7.156156103851339, 0.8841952879233476],
    ],
    [
        [0.0031060048144102275, -0.024168955024115483, 0.08292667106115933, -0.1638815778139369, 0.2040357174524115, -0.1638815778139369, 0.08292667106115933, -0.02416895502411548, 0.003106004814410227],
        [1.0, -7.836870686883497, 26.903378180836505, -52.84097038801592, 64.94530581727399, -51.14856144594746, 25.207168350728377, -7.10719783620174, 0.8777480119461977],
    ],
    [
        [0.0031116243907290627, -0.024131995434747297, 0.08260099637398417, -0.16300118770875346, 0.20284113033575754, -0.1630011877087535, 0.08260099637398417, -0.024131995434747297, 0.0031116243907290636],
        [1.0, -7.825130100518919, 26.82701009384907, -52.62829952803061, 64.61672728077528, -50.84449824491409, 25.03871175506852, -7.055489917591537, 0.8709686672709973],
    ],
    [
        [0.00311862656098334, -0.02409618036804176, 0.08225670608659787, -0.16205805755560632, 0.20155781937132095, -0.1620580575556063, 0.08225670608659783, -0.024096180368041748, 0.003118626560983338],
        [1.0, -7.812444475906389, 26.744792917742004, -52.40017066557027, 64.26556605132083, -50.52077313064782, 24.860076675006667, -7.000890709777808, 0.8638433471745385],
    ],
    [
        [0.0031272149253322996, -0.02406191611162233, 0.08189272018661875, -0.1610474281736525, 0.20017883228663474, -0.16104742817365247, 0.08189272018661872, -0.024061916111622325, 0.0031272149253322988],
        [1.0, -7.798727973099938, 26.656230498673537, -52.155365373511536, 63.890180835524305, -50.176084515473335, 24.670661754185986, -6.943253164766274, 0.8563579532332362],
    ],
    [
        [0.0031376193096942485, -0.024029660088044302, 0.08150788249748558, -0.15996417879216795, 0.19869669617473826, -0.15996417879216793, 0.08150788249748557, -0.024029660088044295, 0.0031376193096942476],
        [1.0, -7.78388613716321, 26.56078143706939, -51.8925651134487, 63.48881052503626, -49.80904856527404, 24.46983455059585, -6.882424921134568, 0.8484982476529699],
    ],
    [
        [0.0031500990533191156, -0.023999924206218687, 0.08110095124530865, -0.15880280513034797, 0.19710339287756878, -0.15880280513034797, 0.08110095124530865, -0.023999924206218683, 0.0031500990533191147],
        [1.0, -7.767814980596656, 26.457854973662048, -51.610343696137775, 63.05956709954218, -49.418195789788584, 24.256930979221394, -6.81824846315003, 0.8402499141112366],
    ],
    [
        [0.003164946736779404, -0.023973277813437444, 0.08067058774250836, -0.15755739790446605, 0.1953903374429516, -0.15755739790446602, 0.08067058774250835, -0.02397327781343744, 0.0031649467367794028],
        [1.0, -7.750399966727792, 26.346806563038584, -51.307159460302, 62.60042863067717, -49.00196797824361, 24.031254995619907, -6.750561353726452, 0.8315986278868355],
    ],
    [
        [0.00318249242076368, -0.023950350010032578, 0.08021534278588402, -0.15622162233880535, 0.19354836107169893, -0.15622162233880535, 0.08021534278588402, -0.023950350010032578, 0.003182492420763679],
        [1.0, -7.731514883829902, 26.22693313052038, -50.98134724507498, 62.10923255178804, -48.55871562877539, 23.792078584931488, -6.679196553701798, 0.8225301360719588],
    ],
    [
        [0.0032031084801995274, -0.023931831015232694, 0.0797336402945247, -0.15478869941966833, 0.1915677003095212, -0.15478869941966833, 0.0797336402945247, -0.02393183101523269, 0.0032031084801995274],
        [1.0, -7.711020598832607, 26.097468014579057, -50.63111026084728, 61.583669403757455, -48.086696053302994, 23.53864213256131, -6.603982841480015, 0.813030348671359],
    ],
    [
        [0.0032272151357414813, -0.02391847217922239, 0.07922375763453211, -0.1532513898292806, 0.1894379946359222, -0.1532513898292806, 0.07922375763453211, -0.023918472179222394, 0.0032272151357414813],
        [1.0, -7.688763678549323, 25.95757560559766, -50.25451200001562, 61.02127732162428, -47.58407237845715, 23.270155266136364, -6.5247453487590175, 0.8030854413905256],
    ],
    [
        [0.003255286806402998, -0.023911084117238402, 0.07868380199593791, -0.1516019817339658, 0.18714829506478048, -0.15160198173396583, 0.07868380199593793, -0.023911084117238406, 0.0032552868064029987],
        [1.0, -7.664574865382608, 25.806345703185784, -49.84946837455229, 60.41943759193387, -47.048913708518455, 22.9857982734595, -6.44130622985162, 0.7926819708964498],
    ],
    [
        [0.0032878594341941153, -0.02391053228961127, 0.07811168210805303, -0.1498322838840067, 0.18468708690373362, -0.1498322838840067, 0.078111682108053, -0.023910532289611267, 0.0032878594341941153],
        [1.0, -7.638267393495845, 25.642787629150902, -49.413740323079956, 59.77537168819519, -46.47919676874196, 22.684724218150638, -6.353485483977968, 0.7818070032972161],
    ],
    [
        [0.0033255389654507023, -0.023917729157695525, 0.07750507451216335, -0.14793362581588657, 0.18204233042489776, -0.14793362581588657, 0.07750507451216335, -0.023917729157695515, 0.003325538965450701],
        [1.0, -7.609635130481154, 25.465824152467157, -48.94492719813779, 59.086140283117174, -45.872809407529374, 22.36606189351989, -6.261101951835702, 0.7704482565263151],
    ],
    [
        [0.0033690112158971776, -0.023933621797511122, 0.07686138357008826, -0.14589686733423152, 0.17920152387864305, -0.14589686733423152, 0.07686138357008823, -0.023933621797511115, 0.0033690112158971768],
        [1.0, -7.5784505286401345, 25.27428530720375, -48.440461326674, 58.34864484305716, -45.22755640411934, 22.02891977594026, -6.163974509695817, 0.7585942572300572],
    ],
    [
        [0.0034190533996584093, -0.023959173534735784, 0.07617769439709123, -0.14371241989021788, 0.1761517940325942, -0.14371241989021785, 0.07617769439709121, -0.023959173534735777, 0.003419053399658409],
        [1.0, -7.5444623691671096, 25.06690221562993, -47.89760423581008, 57.55963253382062, -44.54116810502432, 21.672391161456023, -6.0619234861685936, 0.7462345126370327],
    ],
    [
        [0.003476547669360566, -0.0239953377554714, 0.07545071800371454, -0.14137028295839038, 0.17288002023355004, -0.14137028295839035, 0.07545071800371451, -0.023995337755471385, 0.0034765476693605643],
        [1.0, -7.507393281838263, 24.842301068109823, -47.31344515405566, 56.71570530879385, -43.811312497215276, 21.295560693320148, -5.954772328556008, 0.7333596977321966],
    ],
    [
        [0.0035424970989075782, -0.0240430215191671, 0.07467672816684891, -0.13886009902617294, 0.16937299886086948, -0.13886009902617294, 0.07467672816684894, -0.024043021519167096, 0.003542497098907579],
        [1.0, -7.46693702233463, 24.59899746074319, -46.6849025379299, 55.81333421103339, -43.03561141836872, 20.89751251316222, -5.8423495472521765, 0.7199618578596002],
    ],
    [
        [0.0036180446473613203, -0.024103035916204444, 0.07385149000504425, -0.1361712313119152, 0.16561765595445052, -0.13617123131191522, 0.07385149000504425, -0.02410303591620445, 0.0036180446473613203],
        [1.0, -7.422755489153113, 24.335391353145877, -46.00872953777965, 54.84888010016884, -42.21166170290168, 20.477340293866447, -5.724490967839785, 0.7060346266316733],
    ],
    [
        [0.0037044957779088054, -0.02417602922342101, 0.07297018102313461, -0.1332928687484785, 0.16160131675003286, -0.13329286874847854, 0.07297018102313464, -0.02417602922342102, 0.003704495777908808],
        [1.0, -7.374475462303056, 24.049762984834768, -45.28152450653979, 53.81862221126294, -41.33706216451481, 20.034159436993384, -5.601042321192412, 0.6915734587239474],
    ],
    [
        [0.003803345578401083, -0.02426239774970319, 0.07202730668640067, -0.130214162989278, 0.15731204184350728, -0.130214162989278, 0.07202730668640067, -0.02426239774970319, 0.0038033455784010827],
        [1.0, -7.321685046793338, 23.740270182361378, -44.49974787259481, 52.71879616262778, -40.409447417573396, 19.5671217403153, -5.4718622018246, 0.6765758767772188],
    ],
    [
        [0.003916311450175029, -0.02436216774084731, 0.07101661463090722, -0.12692440200994706, 0.1527390407714409, -0.12692440200994706, 0.07101661463090721, -0.024362167740847308, 0.003916311450175028],
        [1.0, -7.2639298054721415, 23.4049476040813, -43.659746942842034, 51.54564324676603, -39.42652963497963, 19.075432859860893, -5.336825423683386, 0.6610417312101036],
    ],
    [
        [0.004045372714007112, -0.02447483970629536, 0.06993101477005574, -0.12341322396008846, 0.14787317504314582, -0.12341322396008846, 0.06993101477005574, -0.024474839706295364, 0.004045372714007113],
        [1.0, -7.200708568321025, 23.041708609212943, -42.75779047253805, 50.29547305301642, -38.38614942079912, 18.558372903270296, -5.195826800244248, 0.644973471260584],
    ],
    [
        [0.004192818844869577, -0.024599183874128922, 0.0687625173304215, -0.11967087273269492, 0.14270756432823073, -0.11967087273269492, 0.0687625173304215, -0.024599183874128922, 0.004192818844869577],
        [1.0, -7.13146890911842, 22.648350607106035, -41.790115129396625, 48.964741666896614, -37.28633703013001, 18.01532049399321, -5.0487853718033815, 0.6283764250240628],
    ],
    [
        [0.004361308515649445, -0.02473297194791745, 0.06750220798008173, -0.11568849241595228, 0.1372383120692596, -0.11568849241595229, 0.06750220798008173, -0.02473297194791745, 0.0043613085156494445],
        [1.0, -7.055602285837572, 22.222564946368927, -40.75298628089075, 47.550147847515156, -36.125385180802546, 17.445780634791834, -4.895649096827127, 0.6112590856388208],
    ],
    [
        [0.004553942237596307, -0.024872625618104646, 0.06614028975968371, -0.11145845003783365, 0.13146537114446696, -0.11145845003783364, 0.0661402897596837, -0.02487262561810464, 0.0045539422375963055],
        [1.0, -6.9724388486802695, 21.76195264705139, -39.64277582925634, 46.04874966994444, -34.90193465069352, 16.849416668994927, -4.73640001564493, 0.593633400092261],
    ],
    [
        [0.004774352177036799, -0.025012755942172914, 0.06466623701294598, -0.10697466272037351, 0.1253935779480827, -0.10697466272037351, 0.06466623701294598, -0.025012755942172917, 0.004774352177036799],
        [1.0, -6.881241929826782, 21.264047568029238, -38.45606008225373, 44.45810409225115, -33.61507371389484, 16.226086582728886, -4.571059883105437, 0.575515056392652],
    ],
    [
        [0.005026813764885036, -0.025145559157670812, 0.06306912912666425, -0.10223288328364628, 0.11903389715261614, -0.10223288328364628, 0.06306912912666425, -0.025145559157670812, 0.005026813764885036],
        [1.0, -6.781202242488668, 20.726348941580518, -37.18974084009182, 42.77643171160547, -32.26445220470677, 15.575883803464404, -4.399696251440988, 0.5569237640873197],
    ],
    [
        [0.005316385080954152, -0.025260022904921905, 0.06133826477571707, -0.0972308624646319, 0.1124049441414676, -0.09723086246463189, 0.06133826477571707, -0.025260022904921905, 0.005316385080954152],
        [1.0, -6.67143183452569, 20.146365602803375, -35.84119294289222, 41.00280853930343, -30.850410568346156, 14.899182521027189, -4.222428964828426, 0.5378835223349034],
    ],
    [
        [0.005649081803319406, -0.025340881060667363, 0.05946420505243113, -0.09196824852707382, 0.105534895387116, -0.0919682485270738, 0.05946420505243113, -0.02534088106066735, 0.005649081803319405],
        [1.0, -6.550957864759331, 19.521674696580607, -34.40844137743151, 39.13738586159706, -29.374123610401462, 14.196687377048232, -4.039437002257644, 0.5184228689937873],
    ],
    [
        [0.00603209792188605, -0.02536723380794972, 0.057440462864819436, -0.08644599431067883, 0.0984639714969061, -0.08644599431067881, 0.057440462864819415, -0.025367233807949727, 0.006032097921886048],
        [1.0, -6.418716299437366, 18.849998160357522, -32.890370573681, 37.181638054486115, -27.837757733341427, 13.469487127328039, -3.850965574531516, 0.49857510352568163],
    ],
    [
        [0.006474085644450311, -0.025310719924294844, 0.055266155728777966, -0.08066489965090624, 0.09124780348663568, -0.08066489965090624, 0.05526615572877795, -0.02531071992429484, 0.00647408564445031],
        [1.0, -6.273545663602149, 18.12930085406087, -31.2869675767803, 35.13863646211401, -26.24463917912155, 12.719111568452366, -3.6573333436667537, 0.4783784760108312],
    ],
    [
        [0.006985512280348402, -0.025133087358227692, 0.052950083164887383, -0.07462269613959141, 0.08396220217927128, -0.07462269613959142, 0.052950083164887383, -0.025133087358227703, 0.006985512280348402],
        [1.0, -6.114181029236459, 17.357914829568273, -29.599599152190997, 33.01334499607583, -24.599429106652913, 11.947590626160277, -3.458939587697135, 0.45787633434168734],
    ],
    [
        [0.00757911780472208, -0.024782951442013777, 0.05051689804967341, -0.06830873978364209, 0.07671019388349279, -0.06830873978364209, 0.05051689804967341, -0.02478295144201377, 0.007579117804722077],
        [1.0, -5.9392484812379305, 16.534694881993456, -27.83132029967993, 30.81292983670049, -22.908299142821164, 11.157514022590975, -3.2562710797877195, 0.4371172218677802],
    ],
    [
        [0.008270504900994137, -0.024191451084701325, 0.048016342054057734, -0.06169485242232525, 0.06963274111733421, -0.061694852422325246, 0.04801634205405772, -0.024191451084701318, 0.008270504900994133],
        [1.0, -5.747260376193084, 15.65921117009594, -25.987207766087614, 28.547071417299712, -21.179098279455253, 10.352089373098462, -3.049908386212395, 0.41615491864527415],
    ],
    [
        [0.009078904430820055, -0.023266402738262845, 0.045536950269689624, -0.05472005025172613, 0.0629254560488116, -0.05472005025172612, 0.04553695026968962, -0.02326640273826283, 0.009078904430820052],
        [1.0, -5.536611800811432, 14.731985279196826, -24.07470651755242, 26.228261723781806, -19.421498580199426, 9.53519592238651, -2.840531211028877, 0.39504842135969],
    ],
    [
        [0.010028174758752294, -0.02188439649974867, 0.043226259725581105, -0.04726567580274949, 0.056865021482912344, -0.047265675802749464, 0.0432262597255811, -0.021884396499748653, 0.010028174758752288],
        [1.0, -5.305578750597338, 13.754776543941135, -22.10396921993906, 23.87206396864446, -17.647103065285382, 8.711430444235454, -2.6289223228002134, 0.37386186049308207],
    ],
    [
        [0.011148115007245671, -0.019880059127947484, 0.04132046880281075, -0.03911559677749232, 0.051851240212924865, -0.03911559677749232, 0.041320468802810734, -0.01988005912794748, 0.011148115007245671],
        [1.0, -5.052318689481604, 12.730925626774487, -20.088157944384275, 21.497305286597246, -15.869494344369933, 7.886141158609398, -2.4159694845299526, 0.3526643592721647],
    ],
    [
        [0.012476202838282326, -0.017031397000614297, 0.04018781799074283, -0.02989333712030856, 0.04847406060242253, -0.02989333712030856, 0.04018781799074284, -0.017031397000614297, 0.012476202838282326],
        [1.0, -4.774874323163803, 11.665762082908158, -18.043662846524892, 19.12616707003214, -14.104197090650384, 7.065444970926474, -2.2026646613898047, 0.33152984878053343],
    ],
    [
        [0.014059910743774627, -0.013039687196707344, 0.04039188435404654, -0.01896379826166927, 0.047620204467880976, -0.01896379826166926, 0.040391884354046524, -0.013039687196707344, 0.01405991074377462],
        [1.0, -4.471181629271509, 10.56708168178357, -15.990173718342046, 16.78413342256188, -12.368521345529599, 6.256223091483924, -1.9900995821976644, 0.3105368697067782],
    ],
    [
        [0.015959817032927356, -0.0075017468727513305, 0.04278377578970175, -0.005280929446332921, 0.05064208454323311, -0.005280929446332893, 0.042783775789701765, -0.0075017468727513244, 0.015959817032927356],
        [1.0, -4.139083443669142, 9.445697248635692, -13.950516413139031, 14.499758501236741, -10.681246953462253, 5.466090447433287, -1.7794564438454552, 0.2897684175512042],
    ],
    [
        [0.018253817696513384, 0.00012850875846838982, 0.04863627490739046, 0.012846679603654761, 0.05962390721107911, 0.012846679603654773, 0.04863627490739049, 0.00012850875846839185, 0.01825381769651339],
        [1.0, -3.7763502130818685, 8.316063260022592, -11.950136800001879, 12.304222296517917, -9.06210207506252, 4.703335744996679, -1.57199210654131, 0.2693119317245412],
    ],
    [
        [0.021042876738698778, 0.01059364275333596, 0.05983889533956738, 0.0381142211702392, 0.07779818503823577, 0.0381142211702392, 0.05983889533956737, 0.010593642753335962, 0.021042876738698774],
        [1.0, -3.3807098995586142, 7.1969687332709364, -10.016080318486079, 10.230667827569395, -7.530980287384556, 3.9768323785244535, -1.3690134095359912, 0.2492596022728786],
    ],
    [
        [0.02445894634313695, 0.024907772488285882, 0.07918141471516289, 0.0747655358466303, 0.11019314492376578, 0.07476553584663032, 0.07918141471516288, 0.02490777248828587, 0.02445894634313694],
        [1.0, -2.9498894730682403, 6.11228424757082, -8.175276722444021, 8.31335977440911, -6.106830022820237, 3.2959269419754627, -1.171840016473363, 0.2297092934684243],
    ],
    [
        [0.028675976912612946, 0.04446235584457845, 0.11076594737102323, 0.1294168144074487, 0.16463164065613042, 0.12941681440744868, 0.1107659473710232, 0.04446235584457842, 0.028675976912612932],
        [1.0, -2.4816709658865403, 5.091736135690413, -6.45190055756272, 6.586787651107717, -4.806134151989141, 2.67032409689181, -0.9817490592528934, 0.210766602775464],
    ],
    [
        [0.0339253716762506, 0.07117608548520336, 0.16060574157535787, 0.21229493994335172, 0.25326050527665417, 0.21229493994335172, 0.16060574157535787, 0.07117608548520335, 0.03392537167625059],
        [1.0, -1.9739656962958994, 4.171662624387123, -4.863544918988305, 5.0849719326319125, -3.6408704249767347, 2.110007756033106, -0.7998920119769494, 0.19254896491967455],
    ],
    [
        [0.040517902326586405, 0.10770848117359326, 0.23749505706032162, 0.33908843061949423, 0.3948727760705888, 0.3390884306194941, 0.23749505706032156, 0.10770848117359325, 0.0405179023265864],
        [1.0, -1.4249110048230103, 3.3956813271295747, -3.4159308531287262, 3.8414383086358987, -2.6157938338716615, 1.62527543631206, -0.6271672329556255, 0.17519342391072043],
    ],
    [
        [0.04887512131882825, 0.15776596138750992, 0.3542720296950853, 0.5336965059170795, 0.6184023688243125, 0.5336965059170795, 0.35427202969508537, 0.15776596138750995, 0.04887512131882826],
        [1.0, -0.832994678238, 2.815163114502121, -2.0958969929337465, 2.89062260012152, -1.724789226317177, 1.2270265010247254, -0.4640186979786464, 0.15887102429234612],
    ],
    [
        [0.059574894440855966, 0.22654285402648067, 0.5296497445069142, 0.8322823289298178, 0.9681305396364496, 0.8322823289298176, 0.5296497445069142, 0.2265428540264806, 0.059574894440855966],
        [1.0, -0.197213137457387, 2.489362028874504, -0.8625046468287766, 2.271867828573883, -0.945871971614195, 0.9275556223030523, -0.31010731975838124, 0.14381330273441373],
    ],
    [
        [0.0734181799330512, 0.3213601672083867, 0.7908651305701572, 1.2891965928659872, 1.5113521629297664, 1.2891965928659872, 0.7908651305701572, 0.32136016720838667, 0.0734181799330512],
        [1.0, 0.48272962922813006, 2.484992825893144, 0.36370042709980677, 2.0376606015715155, -0.23411139604621306, 0.742294830538571, -0.16375567056115603, 0.13036128886896786],
    ],
    [
        [0.09152816579793671, 0.4525951231800016, 1.177496035209378, 1.9855379026144373, 2.3495030895206743, 1.9855379026144366, 1.177496035209378, 0.45259512318000156, 0.09152816579793667],
        [1.0, 1.2061746065447663, 2.874975896703981, 1.7128384775262602, 2.2682503134796463, 0.4887621438034669, 0.6932813250306931, -0.02097990709753096, 0.11905724851437254],
    ],
    [
        [0.11549927133587232, 0.6350386148386674, 1.7469257854251448, 3.041338638133884, 3.634013532678687, 3.0413386381338823, 1.7469257854251439, 0.6350386148386671, 0.11549927133587225],
        [1.0, 1.9712033874970636, 3.7359837951812325, 3.3781570660800457, 3.0950982467775057, 1.3501227224662664, 0.8157065478701118, 0.1262451017730005, 0.11081946340106466],
    ],
    [
        [0.1476237854978847, 0.8898802392249907, 2.582080065688307, 4.632540991251874, 5.58831841402448, 4.632540991251874, 2.5820800656883076, 0.889880239224991, 0.14762378549788477],
        [1.0, 2.7742678383021415, 5.144323919405203, 5.626616028327145, 4.735265820789662, 2.5508202664011934, 1.1698916764271359, 0.2931676897213624, 0.1072823249194959],
    ],
    [
        [0.1912401383846962, 1.2476016994659966, 3.802168623406001, 7.013861487474265, 8.537235415809873, 7.013861487474265, 3.8021686234060015, 1.2476016994659966, 0.19124013838469614],
        [1.0, 3.609741658781738, 7.169566851912149, 8.803706807159065, 7.536974287506688, 4.402788223740827, 1.8626784036590212, 0.5082056346621963, 0.11147407601827578],
    ],
    [
        [0.2512709460757572, 1.7521383145377685, 5.577049258040684, 10.547801869502575, 12.943574182974151, 10.547801869502575, 5.577049258040683, 1.7521383145377682, 0.2512709460757572],
        [1.0, 4.469365715113051, 9.86511389218322, 13.325933925889354, 12.03144769493236, 7.385334723077518, 3.0847733927888585, 0.8242122519704437, 0.12920226874705093],
    ],
    [
        [0.33504796293571987, 2.4666387597789163, 8.14490031181777, 15.736980083834366, 19.447405497757135, 15.736980083834366, 8.14490031181777, 2.4666387597789163, 0.3350479629357198],
        [1.0, 5.3414883122678205, 13.254310214268585, 19.649828474572022, 18.974561438439544, 12.223079488694427, 5.173881603498221, 1.3399637394316146, 0.17195918965680668],
    ],
    [
        [0.4535232860088639, 3.480579989536404, 11.829201125361827, 23.247307553249684, 28.890332021308563, 23.247307553249684, 11.829201125361829, 3.480579989536406, 0.4535232860088639],
        [1.0, 6.209720059723019, 17.308707556778426, 28.197214000919523, 29.337163756563807, 19.974531813009644, 8.715118963671424, 2.2408555725434156, 0.26315215974301664],
    ],
    [
        [0.6227776841234227, 4.915187317199092, 17.0379983710653, 33.87971846479065, 42.26825954660603, 33.87971846479064, 17.037998371065296, 4.91518731719909, 0.6227776841234222],
        [1.0, 7.049569112338632, 21.908100216828092, 39.193958530864194, 44.149272006208534, 32.070776689721356, 14.678331385644622, 3.8729779460580787, 0.4516080807497132],
    ],
    [
        [0.7042492743008238, 5.595847322158514, 19.490793593143987, 38.868532239932264, 48.53867339600887, 38.868532239932264, 19.49079359314398, 5.595847322158511, 0.7042492743008234],
        [1.0, 7.351487533237439, 23.7334715666807, 43.94729005942437, 51.052776432518094, 38.10320082840874, 17.84534704210253, 4.796139898128623, 0.5665254019807355],
    ],
    [
        [0.7042492743008238, 5.595847322158514, 19.490793593143987, 38.868532239932264, 48.53867339600887, 38.868532239932264, 19.49079359314398, 5.595847322158511, 0.7042492743008234],
        [1.0, 7.351487533237439, 23.7334715666807, 43.94729005942437, 51.052776432518094, 38.10320082840874, 17.84534704210253, 4.796139898128623, 0.5665254019807355],
    ],
    [
        [0.7042492743008238, 5.595847322158514, 19.490793593143987, 38.868532239932264, 48.53867339600887, 38.868532239932264, 19.49079359314398, 5.595847322158511, 0.7042492743008234],
        [1.0, 7.351487533237439, 23.7334715666807, 43.94729005942437, 51.052776432518094, 38.10320082840874, 17.84534704210253, 4.796139898128623, 0.5665254019807355],
    ],
    [
        [0.7042492743008238, 5.595847322158514, 19.490793593143987, 38.868532239932264, 48.53867339600887, 38.868532239932264, 19.49079359314398, 5.595847322158511, 0.7042492743008234],
        [1.0, 7.351487533237439, 23.7334715666807, 43.94729005942437, 51.052776432518094, 38.10320082840874, 17.84534704210253, 4.796139898128623, 0.5665254019807355],
    ],
    [
        [0.7042492743008238, 5.595847322158514, 19.490793593143987, 38.868532239932264, 48.53867339600887, 38.868532239932264, 19.49079359314398, 5.595847322158511, 0.7042492743008234],
        [1.0, 7.351487533237439, 23.7334715666807, 43.94729005942437, 51.052776432518094, 38.10320082840874, 17.84534704210253, 4.796139898128623, 0.5665254019807355],
    ],
    [
        [0.7042492743008238, 5.595847322158514, 19.490793593143987, 38.868532239932264, 48.53867339600887, 38.868532239932264, 19.49079359314398, 5.595847322158511, 0.7042492743008234],
        [1.0, 7.351487533237439, 23.7334715666807, 43.94729005942437, 51.052776432518094, 38.10320082840874, 17.84534704210253, 4.796139898128623, 0.5665254019807355],
    ],
    [
        [0.7042492743008238, 5.595847322158514, 19.490793593143987, 38.868532239932264, 48.53867339600887, 38.868532239932264, 19.49079359314398, 5.595847322158511, 0.7042492743008234],
        [1.0, 7.351487533237439, 23.7334715666807, 43.94729005942437, 51.052776432518094, 38.10320082840874, 17.84534704210253, 4.796139898128623, 0.5665254019807355],
    ],
    [
        [0.7042492743008238, 5.595847322158514, 19.490793593143987, 38.868532239932264, 48.53867339600887, 38.868532239932264, 19.49079359314398, 5.595847322158511, 0.7042492743008234],
        [1.0, 7.351487533237439, 23.7334715666807, 43.94729005942437, 51.052776432518094, 38.10320082840874, 17.84534704210253, 4.796139898128623, 0.5665254019807355],
    ],
    [
        [0.7042492743008238, 5.595847322158514, 19.490793593143987, 38.868532239932264, 48.53867339600887, 38.868532239932264, 19.49079359314398, 5.595847322158511, 0.7042492743008234],
        [1.0, 7.351487533237439, 23.7334715666807, 43.94729005942437, 51.052776432518094, 38.10320082840874, 17.84534704210253, 4.796139898128623, 0.5665254019807355],
    ],
    [
        [0.7042492743008238, 5.595847322158514, 19.490793593143987, 38.868532239932264, 48.53867339600887, 38.868532239932264, 19.49079359314398, 5.595847322158511, 0.7042492743008234],
        [1.0, 7.351487533237439, 23.7334715666807, 43.94729005942437, 51.052776432518094, 38.10320082840874, 17.84534704210253, 4.796139898128623, 0.5665254019807355],
    ],
    [
        [0.7042492743008238, 5.595847322158514, 19.490793593143987, 38.868532239932264, 48.53867339600887, 38.868532239932264, 19.49079359314398, 5.595847322158511, 0.7042492743008234],
        [1.0, 7.351487533237439, 23.7334715666807, 43.94729005942437, 51.052776432518094, 38.10320082840874, 17.84534704210253, 4.796139898128623, 0.5665254019807355],
    ],
    [
        [0.7042492743008238, 5.595847322158514, 19.490793593143987, 38.868532239932264, 48.53867339600887, 38.868532239932264, 19.49079359314398, 5.595847322158511, 0.7042492743008234],
        [1.0, 7.351487533237439, 23.7334715666807, 43.94729005942437, 51.052776432518094, 38.10320082840874, 17.84534704210253, 4.796139898128623, 0.5665254019807355],
    ],
    [
        [0.7042492743008238, 5.595847322158514, 19.490793593143987, 38.868532239932264, 48.53867339600887, 38.868532239932264, 19.49079359314398, 5.595847322158511, 0.7042492743008234],
        [1.0, 7.351487533237439, 23.7334715666807, 43.94729005942437, 51.052776432518094, 38.10320082840874, 17.84534704210253, 4.796139898128623, 0.5665254019807355],
    ],
    [
        [0.7042492743008238, 5.595847322158514, 19.490793593143987, 38.868532239932264, 48.53867339600887, 38.868532239932264, 19.49079359314398, 5.595847322158511, 0.7042492743008234],
        [1.0, 7.351487533237439, 23.7334715666807, 43.94729005942437, 51.052776432518094, 38.10320082840874, 17.84534704210253, 4.796139898128623, 0.5665254019807355],
    ],
    [
        [0.7042492743008238, 5.595847322158514, 19.490793593143987, 38.868532239932264, 48.53867339600887, 38.868532239932264, 19.49079359314398, 5.595847322158511, 0.7042492743008234],
        [1.0, 7.351487533237439, 23.7334715666807, 43.94729005942437, 51.052776432518094, 38.10320082840874, 17.84534704210253, 4.796139898128623, 0.5665254019807355],
    ],
    [
        [0.7042492743008238, 5.595847322158514, 19.490793593143987, 38.868532239932264, 48.53867339600887, 38.868532239932264, 19.49079359314398, 5.595847322158511, 0.7042492743008234],
        [1.0, 7.351487533237439, 23.7334715666807, 43.94729005942437, 51.052776432518094, 38.10320082840874, 17.84534704210253, 4.796139898128623, 0.5665254019807355],
    ],
];

/// 8th-order elliptic lowpass sections for a 8820 Hz stream,
/// one per MIDI pitch.
pub(crate) static MIDI_ELLIPTIC_8820: MidiTable = [
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030950276358120235, -0.02454623572577164, 0.08538010897437347, -0.17012473854775592, 0.21239167536022005, -0.1701247385477559, 0.08538010897437347, -0.024546235725771633, 0.0030950276358120226],
        [1.0, -7.917201553730729, 27.433913518229268, -54.34145360659406, 67.3006793871887, -53.364395080652415, 26.456174935570118, -7.497684376064232, 0.9299667760888614],
    ],
    [
        [0.0030939278520818337, -0.024511582566373518, 0.08519502240231162, -0.16967866675303764, 0.2118025981831568, -0.1696786667530377, 0.08519502240231164, -0.02451158256637352, 0.0030939278520818337],
        [1.0, -7.911639604855297, 27.396677081909843, -54.23467927355273, 67.13070186016719, -53.20216697259215, 26.363358101571013, -7.468211612495049, 0.9259604199034447],
    ],
    [
        [0.0030931064620784124, -0.024476044180215917, 0.0849992717505561, -0.16920235693897365, 0.21117204589724425, -0.16920235693897365, 0.08499927175055609, -0.02447604418021591, 0.0030931064620784115],
        [1.0, -7.905669212438934, 27.356797919184775, -54.12059462686243, 66.94952233809383, -53.02967473737071, 26.264921318395075, -7.437037665902581, 0.9217346669900869],
    ],
    [
        [0.003092620243800496, -0.024439700699678876, 0.08479225745383713, -0.16869359685341506, 0.21049683984414758, -0.16869359685341506, 0.08479225745383713, -0.024439700699678872, 0.0030926202438004958],
        [1.0, -7.899256665874112, 27.314068239723, -53.99865450385232, 66.75635311501625, -52.84624314633014, 26.160522448307834, -7.404068168330174, 0.9172786814807804],
    ],
    [
        [0.003092533984664978, -0.024402651067562224, 0.08457334674890657, -0.16814999979823433, 0.20977354047541133, -0.16814999979823433, 0.08457334674890657, -0.024402651067562224, 0.0030925339846649773],
        [1.0, -7.89236511449826, 27.268262061258632, -53.868269219227976, 66.55034715188717, -52.651150894571984, 26.049798838004936, -7.369204058780635, 0.9125812361515915],
    ],
    [
        [0.0030929214853276685, -0.024365015431410883, 0.08434187157152051, -0.16756899052059784, 0.20899842612430292, -0.16756899052059784, 0.08434187157152051, -0.024365015431410886, 0.003092921485327668],
        [1.0, -7.884954245512667, 27.21913348727677, -53.728800717200464, 66.33059348154507, -52.443627514522134, 25.93236622296589, -7.3323414311206765, 0.9076307169219702],
    ],
    [
        [0.003093866684077422, -0.024326937746016984, 0.08409712621059127, -0.16694779010331812, 0.20816747043799014, -0.16694779010331806, 0.08409712621059127, -0.024326937746016984, 0.0030938666840774212],
        [1.0, -7.876979926922233, 27.16641481908824, -53.57955840421832, 66.09611229932074, -52.22285013393486, 25.80781760753027, -7.293371390753179, 0.9024151304493322],
    ],
    [
        [0.00309546491664861, -0.024288588585796418, 0.08383836466718642, -0.16628339983258444, 0.20727631850576006, -0.16628339983258444, 0.0838383646671864, -0.024288588585796418, 0.00309546491664861],
        [1.0, -7.868393811632645, 27.109814487894084, -53.41979464358087, 65.8458497327773, -51.98794008537497, 25.675722128624606, -7.252179923070596, 0.8969221152493386],
    ],
    [
        [0.0030978243283812253, -0.02425016816355499, 0.08356479765321094, -0.1655725840359386, 0.20632026175970478, -0.16557258403593858, 0.08356479765321094, -0.02425016816355499, 0.0030978243283812253],
        [1.0, -7.859142898425966, 27.049014791704067, -53.248699894427844, 65.57867228848335, -51.73795937890851, 25.5356239133844, -7.208647777218468, 0.8911389568113284],
    ],
    [
        [0.003101067458114483, -0.024211909545150814, 0.08327558914883465, -0.16481185190290085, 0.20529421177669008, -0.1648118519029009, 0.08327558914883468, -0.02421190954515082, 0.0031010674581144837],
        [1.0, -7.849169045079571, 26.98366942135244, -53.06539747963161, 65.29336097955232, -51.47190705559942, 25.387040943689627, -7.162650369283753, 0.8850526072185637],
    ],
    [
        [0.0031053330161121247, -0.024174082040227418, 0.0829698524184388, -0.1639974383263635, 0.20419267317701573, -0.16399743832636354, 0.08296985241843882, -0.02417408204022743, 0.003105333016112126],
        [1.0, -7.838408428394016, 26.913400759408738, -52.86893797020173, 64.98860514531069, -51.18871544669612, 25.229463943945863, -7.114057709688361, 0.8786497098241652],
    ],
    [
        [0.0031107778817905402, -0.024136994736914687, 0.08264664536140436, -0.1631252838362015, 0.20300971589896036, -0.16312528383620153, 0.08264664536140438, -0.02413699473691469, 0.0031107778817905415],
        [1.0, -7.826790945350014, 26.837796935583082, -52.65829317821921, 64.66299598426495, -50.887246372359996, 25.062355312375104, -7.062734360319324, 0.8719166295749615],
    ],
    [
        [0.003117579351185815, -0.024101000132389055, 0.08230496504572568, -0.16219101373925607, 0.20173894723284627, -0.16219101373925604, 0.08230496504572565, -0.02410100013238904, 0.003117579351185813],
        [1.0, -7.81423954902092, 26.756408622372078, -52.43234975640494, 64.31501983401486, -50.56628732476384, 24.88514812073421, -7.008539427773799, 0.8648394896165539],
    ],
    [
        [0.003125937669118005, -0.024066497790464877, 0.08194374123843134, -0.16118991663401797, 0.20037348412736375, -0.16118991663401794, 0.08194374123843133, -0.02406649779046487, 0.003125937669118004],
        [1.0, -7.8006695122227745, 26.668745555301093, -52.18990241060284, 63.94305124746147, -50.224547693729704, 24.69724521285531, -6.951326600045796, 0.857404214852575],
    ],
    [
        [0.0031360788870979724, -0.02403393793071136, 0.08156182870633884, -0.16011692253645674, 0.19890592643918914, -0.16011692253645674, 0.08156182870633882, -0.024033937930711357, 0.0031360788870979715],
        [1.0, -7.785987611187628, 26.57427276334386, -51.92964674223752, 63.545345934247266, -49.86065510919744, 24.498018438820953, -6.890944235040081, 0.8495965831683769],
    ],
    [
        [0.003148258095435796, -0.024003824819383776, 0.08115799801302057, -0.1589665809384681, 0.1973283319895275, -0.1589665809384681, 0.08115799801302055, -0.02400382481938377, 0.0031482580954357953],
        [1.0, -7.770091220797029, 26.472406497131225, -51.65017175179571, 63.12003366061739, -49.47315199419174, 24.286808069074844, -6.82723551047412, 0.8414022850629203],
    ],
    [
        [0.0031627630870793154, -0.02397671978872808, 0.08073092448241995, -0.15773303922576618, 0.19563219452367916, -0.15773303922576615, 0.08073092448241992, -0.023976719788728076, 0.0031627630870793145],
        [1.0, -7.752867312111617, 26.36250984563402, -51.34995205231439, 62.665111230694144, -49.06049244510236, 24.06292244145784, -6.760038646025188, 0.8328069924607336],
    ],
    [
        [0.003179918521853355, -0.023953243655434796, 0.08027917493607213, -0.15641002201175366, 0.1938084259481297, -0.15641002201175366, 0.08027917493607212, -0.023953243655434792, 0.0031799185218533543],
        [1.0, -7.734191342082209, 26.24388803641651, -51.02733986460915, 62.1784357085419, -48.621039583594715, 23.825637904192256, -6.689187210000742, 0.8237964374966785],
    ],
    [
        [0.0032000906735091005, -0.023934078237938947, 0.0798011917396357, -0.15499081210244758, 0.19184734455020766, -0.1549908121024476, 0.07980119173963571, -0.023934078237938947, 0.0032000906735090997],
        [1.0, -7.713926024431666, 26.11578342067119, -50.68055689457351, 61.65771808452418, -48.153063556943934, 23.574199129351893, -6.6145105243542135, 0.8143565020774968],
    ],
    [
        [0.0032236928589944444, -0.023919966581751266, 0.07929527361672015, -0.15346823400000817, 0.18973867129436922, -0.15346823400000822, 0.07929527361672016, -0.023919966581751266, 0.0032236928589944444],
        [1.0, -7.6919199697627665, 25.977370152515395, -50.30768622854319, 61.10051764262852, -47.65474040170415, 23.307819884490524, -6.535834183531992, 0.8044733190233231],
    ],
    [
        [0.0032511916704605964, -0.023911711386719294, 0.07875955260657026, -0.15183464108416478, 0.18747153674247075, -0.15183464108416478, 0.07875955260657026, -0.02391171138671929, 0.0032511916704605955],
        [1.0, -7.6680061819859935, 25.827748583009058, -49.90666442685482, 60.504237349082445, -47.12415203005668, 23.025684364975213, -6.452980704408524, 0.7941333855762838],
    ],
    [
        [0.003283114156796775, -0.023910170983169596, 0.07819196646223754, -0.1500819078873423, 0.18503450166801516, -0.15008190788734233, 0.07819196646223756, -0.0239101709831696, 0.003283114156796775],
        [1.0, -7.642000397188521, 25.665939403721445, -49.47527404997376, 59.86612065825564, -46.55928764959825, 22.726949206280253, -6.36577032642763, 0.7833236900287915],
    ],
    [
        [0.0033200561342903914, -0.02391625201631354, 0.0775902257161893, -0.14820142920546278, 0.18241559502967572, -0.14820142920546273, 0.07759022571618926, -0.023916252016313522, 0.0033200561342903883],
        [1.0, -7.613699250103637, 25.49087759326259, -49.01113691777232, 59.18325022114851, -45.95804698633664, 22.410746314095, -6.274021982990652, 0.7720318521672026],
    ],
    [
        [0.0033626918470758475, -0.02393089775843419, 0.07695177459505796, -0.14618412816564486, 0.17960237363856196, -0.14618412816564486, 0.07695177459505796, -0.02393089775843419, 0.0033626918470758475],
        [1.0, -7.582878252418096, 25.301406244010547, -48.511708482792656, 58.452549086318406, -45.31824574773724, 22.076186670569694, -6.177554467074824, 0.7602462781429785],
    ],
    [
        [0.003411785249571307, -0.023955070660886185, 0.07627374496652407, -0.14402047580446495, 0.1765820085946605, -0.14402047580446498, 0.07627374496652409, -0.023955070660886185, 0.003411785249571308],
        [1.0, -7.54928956631337, 25.096270376529542, -47.97427379491506, 57.67078510440227, -44.63762383807778, 21.722365297264755, -6.076187815971837, 0.747956330268682],
    ],
    [
        [0.003468203247943465, -0.02398972736265151, 0.07555290258293317, -0.14170052519014767, 0.17334140437501708, -0.14170052519014767, 0.07555290258293317, -0.02398972736265151, 0.003468203247943464],
        [1.0, -7.512659555927342, 24.874110887356636, -47.3959456502206, 56.83457938670256, -43.913856922043706, 21.348367579144256, -5.969744941831564, 0.7351525120851907],
    ],
    [
        [0.003532931319428885, -0.02403578386236514, 0.07478558509886213, -0.13921396363236957, 0.1698673573201749, -0.13921396363236957, 0.07478558509886213, -0.024035783862365136, 0.0035329313194288857],
        [1.0, -7.472686098914004, 24.633458823697453, -46.77366565350455, 55.94041982635951, -43.14457202384168, 20.953277178852243, -5.858053536278782, 0.7218266688539919],
    ],
    [
        [0.003607092031780461, -0.024094067900780357, 0.07396763175867922, -0.13655018702963784, 0.1661467611746383, -0.13655018702963784, 0.07396763175867922, -0.024094067900780357, 0.0036070920317804603],
        [1.0, -7.429035640057327, 24.372730238212934, -46.10420908430545, 54.98468086737712, -42.3273679468071, 20.536185795888954, -5.740948278615389, 0.7079722033891671],
    ],
    [
        [0.0036919671162951037, -0.024165254743012458, 0.07309430538568103, -0.1336984008421013, 0.16216686828212312, -0.1336984008421013, 0.07309430538568103, -0.024165254743012458, 0.0036919671162951046],
        [1.0, -7.381339969073837, 24.090221950981984, -45.38419464259538, 53.963650900878406, -41.45984140018254, 20.09620505021595, -5.618273377865478, 0.6935843068521832],
    ],
    [
        [0.0037890239147517456, -0.024249781430678, 0.07216020851787666, -0.13064775243483426, 0.15791561601875104, -0.13064775243483426, 0.07216020851787666, -0.024249781430678005, 0.0037890239147517456],
        [1.0, -7.329192705458729, 23.784108636801452, -44.61010036389274, 52.87356887626039, -40.53961982170597, 19.63248079293104, -5.489885478966257, 0.6786602037839254],
    ],
    [
        [0.0038999472335326125, -0.024347733107005096, 0.07115919746094715, -0.12738749942419816, 0.1533820290981781, -0.12738749942419816, 0.07115919746094716, -0.024347733107005103, 0.0038999472335326133],
        [1.0, -7.272145474672254, 23.45244176762247, -43.77828723479453, 51.71067193158623, -39.56440198126646, 19.14421016614819, -5.355656962510385, 0.6631994102380802],
    ],
    [
        [0.004026677910873375, -0.024458693086255093, 0.07008430100463023, -0.12390721786776945, 0.14855670959553685, -0.12390721786776947, 0.07008430100463026, -0.024458693086255093, 0.004026677910873375],
        [1.0, -7.209703762352405, 23.093151076010766, -42.885032307129656, 50.47125606310691, -38.532007534115664, 18.630661747675227, -5.215479665309875, 0.647204003404675],
    ],
    [
        [0.004171459753650537, -0.024581545783315034, 0.06892765506248769, -0.12019705216658097, 0.1434324281268093, -0.12019705216658097, 0.0689276550624877, -0.024581545783315038, 0.004171459753650537],
        [1.0, -7.141322436859444, 22.70404937046565, -41.92657339748504, 49.15175205381445, -37.44043675079115, 18.091199120361743, -5.0692690453287685, 0.6306789005706761],
    ],
    [
        [0.004336896952383806, -0.024714218222710534, 0.06768047124839428, -0.11624800460083144, 0.13800483202213323, -0.11624800460083143, 0.06768047124839427, -0.02471421822271053, 0.0043368969523838044],
        [1.0, -7.066400935659158, 22.282841732134443, -40.899167759690194, 47.7488190443853, -36.28794166987363, 17.525308197085835, -4.916968808809249, 0.6136321446566275],
    ],
    [
        [0.004526024669335418, -0.024853341310296862, 0.06633306740470345, -0.11205225524131297, 0.1322732903672619, -0.11205225524131296, 0.06633306740470343, -0.02485334131029686, 0.004526024669335419],
        [1.0, -6.984278118272431, 21.827140360231382, -39.799167415497024, 46.25945822729413, -35.07310987894777, 16.93262860527145, -4.75855600922117, 0.5960751928987995],
    ],
    [
        [0.00474239625796174, -0.02499380596463687, 0.06487500279571448, -0.10760349060383693, 0.12624190293534066, -0.10760349060383693, 0.06487500279571448, -0.02499380596463687, 0.004742396257961739],
        [1.0, -6.894226798298632, 21.334486615873477, -38.62311409860344, 44.68114913604789, -33.794962002706086, 16.312989383468622, -4.594046616455515, 0.5780232045237449],
    ],
    [
        [0.004990191571060051, -0.025128181000361637, 0.06329538215743082, -0.10289719878775053, 0.11992071286215104, -0.10289719878775053, 0.06329538215743083, -0.025128181000361637, 0.004990191571060054],
        [1.0, -6.79544798002544, 20.802382146615194, -37.367856972183496, 43.01201083305064, -32.453063732098045, 15.666449159598839, -4.423501539854621, 0.559495322502032],
    ],
    [
        [0.005274352129526896, -0.02524594854371611, 0.0615834240431211, -0.09793085523637275, 0.11332718578707619, -0.09793085523637275, 0.0615834240431211, -0.02524594854371611, 0.005274352129526895],
        [1.0, -6.687064842185623, 20.228331361732867, -36.030696365815416, 41.25098990262018, -31.047652823844615, 14.993340857480824, -4.247033069556431, 0.5405149436939464],
    ],
    [
        [0.00560075066310104, -0.025332497641341274, 0.0597294342299738, -0.09270386940078082, 0.10648805831683447, -0.09270386940078082, 0.059729434229973816, -0.025332497641341274, 0.005600750663101041],
        [1.0, -6.568116533512586, 19.60989797510007, -34.6095566666191, 39.39807644361633, -29.57978088579429, 14.294320805657652, -4.064811676499422, 0.5211099709478462],
    ],
    [
        [0.00597640484980047, -0.02536779605802967, 0.05772639055929342, -0.08721707732274941, 0.09944172786344985, -0.08721707732274943, 0.05772639055929342, -0.025367796058029673, 0.00597640484980047],
        [1.0, -6.437551873102369, 18.944778839841206, -33.10319108341942, 37.45454812404108, -28.051468881642705, 13.570421890059988, -3.8770730815056953, 0.5013130400335111],
    ],
    [
        [0.006409748181780363, -0.025324631884673262, 0.05557244042345448, -0.08147143143878638, 0.0922414731373501, -0.08147143143878638, 0.05557244042345447, -0.025324631884673262, 0.006409748181780365],
        [1.0, -6.294223084694687, 18.23089886452634, -31.51142013399625, 35.4232406858656, -26.465874070897797, 12.823110089285402, -3.6841254672843737, 0.48116171376252653],
    ],
    [
        [0.006910975065516606, -0.025166277440949004, 0.05327474912598899, -0.0754653308163776, 0.08495999000129163, -0.0754653308163776, 0.05327474912598899, -0.025166277440949, 0.0069109750655166075],
        [1.0, -6.13687973964013, 17.46653141605767, -29.83540418550049, 33.308840938944385, -24.82746447194389, 12.054343348926588, -3.4863566630464184, 0.46069863537256106],
    ],
    [
        [0.007492482936933111, -0.024843373730448547, 0.05085533525956383, -0.06918971325084819, 0.07769604843957924, -0.06918971325084818, 0.05085533525956383, -0.024843373730448547, 0.007492482936933109],
        [1.0, -5.964163140699903, 16.650449261921576, -28.077947945362375, 31.118195126338986, -23.142194819024574, 11.26663128300421, -3.2842410786118443, 0.4399716333866005],
    ],
    [
        [0.008169441923752099, -0.02428975822533311, 0.04835981523837054, -0.06261953577840251, 0.0705845969396275, -0.06261953577840251, 0.048359815238370525, -0.02428975822533311, 0.008169441923752102],
        [1.0, -5.774601450549223, 15.782111752843857, -26.243831116583937, 28.860621473497485, -21.417675300765588, 10.46309363552916, -3.078346102042951, 0.41903377092862715],
    ],
    [
        [0.008960533255955208, -0.023416853204056634, 0.04587039265352516, -0.055699512786196656, 0.0638124746586671, -0.055699512786196656, 0.045870392653525154, -0.023416853204056627, 0.008960533255955208],
        [1.0, -5.566605958072902, 14.86189454518902, -24.3401540702307, 26.548210711950503, -19.66332105055428, 9.647514803217163, -2.8693375999734805, 0.3979433342233926],
    ],
    [
        [0.009888912417475096, -0.02210608355926968, 0.04352502661162495, -0.04832082694878446, 0.05764321394918235, -0.048320826948784465, 0.04352502661162493, -0.022106083559269685, 0.009888912417475094],
        [1.0, -5.338468986017549, 13.891368632101964, -22.376679823958636, 24.196092492234538, -17.89046635886877, 8.824391038286214, -2.657984069752425, 0.3767637582506955],
    ],
    [
        [0.010983473699441219, -0.02019858361191634, 0.041545580311015545, -0.040283777467981896, 0.05245649129241883, -0.040283777467981896, 0.04154558031101556, -0.020198583611916336, 0.010983473699441217],
        [1.0, -5.088364079790361, 12.873635676365122, -20.36614322410688, 21.822639212432378, -16.112422875375856, 7.998966272723143, -2.445158881802181, 0.35556349308429364],
    ],
    [
        [0.01228052192042468, -0.01748115540354857, 0.04027900876750388, -0.031238684874335194, 0.048811012893258746, -0.031238684874335204, 0.04027900876750388, -0.017481155403548568, 0.012280521920424677],
        [1.0, -4.814349284502579, 11.813726446573025, -18.3244843024015, 19.449572636840372, -14.344455681967876, 7.177251931125994, -2.2318399093381296, 0.33441582364828887],
    ],
    [
        [0.013825998405284624, -0.013667017350953969, 0.040257470741462575, -0.02059339167105141, 0.04754459893009222, -0.020593391671051398, 0.04025747074146257, -0.01366701735095396, 0.013825998405284617],
        [1.0, -4.51437452204554, 10.719068310870352, -16.270944571011164, 17.101934158082656, -12.603645096378239, 6.366025796658403, -2.019105652752717, 0.31339867066810306],
    ],
    [
        [0.015678467496227175, -0.00836927504508667, 0.04228590408282778, -0.007369735920904966, 0.04993284149245557, -0.007369735920904993, 0.042285904082827765, -0.00836927504508668, 0.015678467496227172],
        [1.0, -4.186294329446982, 9.600025904208621, -14.227941844479744, 14.807879041835662, -10.908595456709975, 5.572805243111057, -1.808126694318224, 0.2925944252118364],
    ],
    [
        [0.01791315537997775, -0.001064171312596881, 0.047569464189751484, 0.010017514905764906, 0.057939251278478945, 0.01001751490576491, 0.047569464189751484, -0.001064171312596877, 0.01791315537997775],
        [1.0, -3.8278875225540663, 8.470515797629128, -12.220610584118806, 12.598262300472927, -9.278944890087725, 4.805791403344478, -1.600150904289527, 0.27208990988921955],
    ],
    [
        [0.020627457718945367, 0.008960094134184316, 0.05789884240242036, 0.034098968412901005, 0.07460715471354855, 0.03409896841290097, 0.05789884240242036, 0.008960094134184304, 0.02062745771894537],
        [1.0, -3.4368857149913707, 7.348690645232522, -10.275860845493021, 10.506004805961943, -7.734621826402661, 4.0737838604485646, -1.396480149510101, 0.251976627976505],
    ],
    [
        [0.023948516210332706, 0.022675029544953637, 0.07591965285322626, 0.06886528972510973, 0.10466943795465031, 0.06886528972510973, 0.07591965285322626, 0.02267502954495363, 0.0239485162103327],
        [1.0, -3.011013062126157, 6.257680052410938, -8.420770819792597, 8.565271413592683, -6.294783699020355, 3.3860714603141346, -1.1984351229166776, 0.23235157819959315],
    ],
    [
        [0.028043737374400017, 0.041412753976796404, 0.10552395313721219, 0.12054586026952298, 0.15549031595470178, 0.12054586026952299, 0.10552395313721222, 0.04141275397679641, 0.028043737374400017],
        [1.0, -2.5480401246474127, 5.2263632450240225, -6.680088692109826, 6.810570145652341, -4.9763583012620245, 2.7523159197146096, -1.0073029333695345, 0.21331911580727392],
    ],
    [
        [0.03313553758541786, 0.06700886228056267, 0.1524191907920763, 0.19878030208294184, 0.23850876585763728, 0.19878030208294184, 0.15241919079207633, 0.06700886228056267, 0.03313553758541787],
        [1.0, -2.045855366555227, 4.290131197170649, -5.072585158203407, 5.276008559376336, -3.7920832221929066, 2.1824645434375896, -0.8242585563944959, 0.19499470152744403],
    ],
    [
        [0.039522222709993025, 0.10200584414590787, 0.22495476250958324, 0.3183709829477198, 0.37143284481380817, 0.3183709829477198, 0.22495476250958324, 0.10200584414590787, 0.03952222270999303],
        [1.0, -1.5025585241163213, 3.4915715816216313, -3.6059793716109647, 3.9951392175099514, -2.747893183051242, 1.6867625816260547, -0.6502448096964044, 0.17751203602877824],
    ],
    [
        [0.04760787073927575, 0.14994435508494627, 0.3353221318552392, 0.5018882659317139, 0.5815461128809214, 0.501888265931714, 0.3353221318552392, 0.14994435508494627, 0.04760787073927576],
        [1.0, -0.9165809021422138, 2.880976878296504, -2.270176666144934, 3.0021101820906866, -1.8394199305787917, 1.2759950073124482, -0.4857836508669928, 0.16103629593350544],
    ],
    [
        [0.05794557923793639, 0.21578259032667468, 0.5012953107628798, 0.7835158399755925, 0.9106408246617447, 0.7835158399755925, 0.5012953107628797, 0.21578259032667466, 0.05794557923793638],
        [1.0, -0.28683854824394583, 2.5165322329666857, -1.0286353039057468, 2.3352215335738924, -1.0472121900123152, 0.9621900816149748, -0.33066945916403395, 0.1457885007246042],
    ],
    [
        [0.07130078951598487, 0.3065032971291571, 0.7487496859043462, 1.2146779116283168, 1.4222944365617936, 1.2146779116283168, 0.7487496859043464, 0.3065032971291573, 0.07130078951598491],
        [1.0, 0.3870748340428416, 2.4639833981278385, 0.19213378083702715, 2.0444653292136574, -0.3300023372799449, 0.7601951211782234, -0.18345321177897173, 0.13209053182321845],
    ],
    [
        [0.08874513691791222, 0.4319965745204784, 1.1152940617550762, 1.8721852706745086, 2.2124541608375496, 1.8721852706745081, 1.1152940617550762, 0.43199657452047835, 0.08874513691791218],
        [1.0, 1.1046475507256504, 2.7955151607504964, 1.5145705759540915, 2.205129511461413, 0.3851331663471581, 0.6908443802191137, -0.040546866488587935, 0.12044925160685228],
    ],
    [
        [0.11179726881534366, 0.6063485808125183, 1.6554760914873201, 2.8698588740365394, 3.4245605723358326, 2.8698588740365403, 1.6554760914873201, 0.6063485808125183, 0.11179726881534371],
        [1.0, 1.864153854213876, 3.5874869798010005, 3.1225843049711166, 2.9398956086946333, 1.217642967108568, 0.7869756332262584, 0.10537603053219989, 0.11171633748456794],
    ],
    [
        [0.14263669817041835, 0.8497260591769279, 2.4481662626490697, 4.374779349355397, 5.270631895263458, 4.374779349355398, 2.44816626264907, 0.8497260591769281, 0.1426366981704184],
        [1.0, 2.662293228808068, 4.916575023150439, 5.272578780541213, 4.451650165679249, 2.356452004370495, 1.104472686165069, 0.26830524962877444, 0.10739833804305413],
    ],
    [
        [0.18443203079996637, 1.1911256035752644, 3.606844897676425, 6.629297944115825, 8.059592294379625, 6.629297944115822, 3.6068448976764245, 1.191125603575264, 0.18443203079996628],
        [1.0, 3.493753676759237, 6.8537500281926675, 8.299375346184043, 7.067641042723965, 4.095438445376889, 1.742048808145848, 0.4743473167724942, 0.11027246712325534],
    ],
    [
        [0.2418479272313898, 1.6723389620321238, 5.2934528722977925, 9.9792650291326, 12.233009413637566, 9.979265029132602, 5.293452872297793, 1.6723389620321245, 0.2418479272313899],
        [1.0, 4.350674766483634, 9.455325605858532, 12.610909222516963, 11.291078395408299, 6.886872602045621, 2.8759030305898117, 0.7720420323077076, 0.12564098393371062],
    ],
    [
        [0.32182423518804526, 2.3534845483882827, 7.735714099898909, 14.906311417816514, 18.404598747911084, 14.906311417816514, 7.7357140998989085, 2.353484548388282, 0.321824235188045],
        [1.0, 5.221928073256036, 12.74980974562185, 18.661369355036726, 17.84585743908937, 11.416520471266004, 4.818630831325594, 1.2520324183888767, 0.16395279053778128],
    ],
    [
        [0.4347312260717141, 3.3200103231887415, 11.244750748053502, 22.05374450461666, 27.388554280994406, 22.053744504616663, 11.244750748053503, 3.3200103231887415, 0.4347312260717141],
        [1.0, 6.091898638702532, 16.717606253887094, 26.884237120713337, 27.677834584747167, 18.692599544233126, 8.113997699551359, 2.0844022727853533, 0.24641025938617928],
    ],
    [
        [0.5958643470885333, 4.688778799625196, 16.218834345323398, 32.21010215880489, 40.16836472840425, 32.210102158804894, 16.218834345323398, 4.688778799625196, 0.5958643470885332],
        [1.0, 6.937568779583116, 21.254715306785936, 37.54699295254092, 41.82804460710616, 30.098719294121416, 13.670705565221326, 3.5872422494390808, 0.41711989356719187],
    ],
    [
        [0.7042492743008238, 5.595847322158514, 19.490793593143987, 38.868532239932264, 48.53867339600887, 38.868532239932264, 19.49079359314398, 5.595847322158511, 0.7042492743008234],
        [1.0, 7.351487533237439, 23.7334715666807, 43.94729005942437, 51.052776432518094, 38.10320082840874, 17.84534704210253, 4.796139898128623, 0.5665254019807355],
    ],
    [
        [0.7042492743008238, 5.595847322158514, 19.490793593143987, 38.868532239932264, 48.53867339600887, 38.868532239932264, 19.49079359314398, 5.595847322158511, 0.7042492743008234],
        [1.0, 7.351487533237439, 23.7334715666807, 43.94729005942437, 51.052776432518094, 38.10320082840874, 17.84534704210253, 4.796139898128623, 0.5665254019807355],
    ],
    [
        [0.7042492743008238, 5.595847322158514, 19.490793593143987, 38.868532239932264, 48.53867339600887, 38.868532239932264, 19.49079359314398, 5.595847322158511, 0.7042492743008234],
        [1.0, 7.351487533237439, 23.7334715666807, 43.94729005942437, 51.052776432518094, 38.10320082840874, 17.84534704210253, 4.796139898128623, 0.5665254019807355],
    ],
    [
        [0.7042492743008238, 5.595847322158514, 19.490793593143987, 38.868532239932264, 48.53867339600887, 38.868532239932264, 19.49079359314398, 5.595847322158511, 0.7042492743008234],
        [1.0, 7.351487533237439, 23.7334715666807, 43.94729005942437, 51.052776432518094, 38.10320082840874, 17.84534704210253, 4.796139898128623, 0.5665254019807355],
    ],
    [
        [0.7042492743008238, 5.595847322158514, 19.490793593143987, 38.868532239932264, 48.53867339600887, 38.868532239932264, 19.49079359314398, 5.595847322158511, 0.7042492743008234],
        [1.0, 7.351487533237439, 23.7334715666807, 43.94729005942437, 51.052776432518094, 38.10320082840874, 17.84534704210253, 4.796139898128623, 0.5665254019807355],
    ],
    [
        [0.7042492743008238, 5.595847322158514, 19.490793593143987, 38.868532239932264, 48.53867339600887, 38.868532239932264, 19.49079359314398, 5.595847322158511, 0.7042492743008234],
        [1.0, 7.351487533237439, 23.7334715666807, 43.94729005942437, 51.052776432518094, 38.10320082840874, 17.84534704210253, 4.796139898128623, 0.5665254019807355],
    ],
    [
        [0.7042492743008238, 5.595847322158514, 19.490793593143987, 38.868532239932264, 48.53867339600887, 38.868532239932264, 19.49079359314398, 5.595847322158511, 0.7042492743008234],
        [1.0, 7.351487533237439, 23.7334715666807, 43.94729005942437, 51.052776432518094, 38.10320082840874, 17.84534704210253, 4.796139898128623, 0.5665254019807355],
    ],
    [
        [0.7042492743008238, 5.595847322158514, 19.490793593143987, 38.868532239932264, 48.53867339600887, 38.868532239932264, 19.49079359314398, 5.595847322158511, 0.7042492743008234],
        [1.0, 7.351487533237439, 23.7334715666807, 43.94729005942437, 51.052776432518094, 38.10320082840874, 17.84534704210253, 4.796139898128623, 0.5665254019807355],
    ],
    [
        [0.7042492743008238, 5.595847322158514, 19.490793593143987, 38.868532239932264, 48.53867339600887, 38.868532239932264, 19.49079359314398, 5.595847322158511, 0.7042492743008234],
        [1.0, 7.351487533237439, 23.7334715666807, 43.94729005942437, 51.052776432518094, 38.10320082840874, 17.84534704210253, 4.796139898128623, 0.5665254019807355],
    ],
    [
        [0.7042492743008238, 5.595847322158514, 19.490793593143987, 38.868532239932264, 48.53867339600887, 38.868532239932264, 19.49079359314398, 5.595847322158511, 0.7042492743008234],
        [1.0, 7.351487533237439, 23.7334715666807, 43.94729005942437, 51.052776432518094, 38.10320082840874, 17.84534704210253, 4.796139898128623, 0.5665254019807355],
    ],
    [
        [0.7042492743008238, 5.595847322158514, 19.490793593143987, 38.868532239932264, 48.53867339600887, 38.868532239932264, 19.49079359314398, 5.595847322158511, 0.7042492743008234],
        [1.0, 7.351487533237439, 23.7334715666807, 43.94729005942437, 51.052776432518094, 38.10320082840874, 17.84534704210253, 4.796139898128623, 0.5665254019807355],
    ],
    [
        [0.7042492743008238, 5.595847322158514, 19.490793593143987, 38.868532239932264, 48.53867339600887, 38.868532239932264, 19.49079359314398, 5.595847322158511, 0.7042492743008234],
        [1.0, 7.351487533237439, 23.7334715666807, 43.94729005942437, 51.052776432518094, 38.10320082840874, 17.84534704210253, 4.796139898128623, 0.5665254019807355],
    ],
    [
        [0.7042492743008238, 5.595847322158514, 19.490793593143987, 38.868532239932264, 48.53867339600887, 38.868532239932264, 19.49079359314398, 5.595847322158511, 0.7042492743008234],
        [1.0, 7.351487533237439, 23.7334715666807, 43.94729005942437, 51.052776432518094, 38.10320082840874, 17.84534704210253, 4.796139898128623, 0.5665254019807355],
    ],
    [
        [0.7042492743008238, 5.595847322158514, 19.490793593143987, 38.868532239932264, 48.53867339600887, 38.868532239932264, 19.49079359314398, 5.595847322158511, 0.7042492743008234],
        [1.0, 7.351487533237439, 23.7334715666807, 43.94729005942437, 51.052776432518094, 38.10320082840874, 17.84534704210253, 4.796139898128623, 0.5665254019807355],
    ],
    [
        [0.7042492743008238, 5.595847322158514, 19.490793593143987, 38.868532239932264, 48.53867339600887, 38.868532239932264, 19.49079359314398, 5.595847322158511, 0.7042492743008234],
        [1.0, 7.351487533237439, 23.7334715666807, 43.94729005942437, 51.052776432518094, 38.10320082840874, 17.84534704210253, 4.796139898128623, 0.5665254019807355],
    ],
    [
        [0.7042492743008238, 5.595847322158514, 19.490793593143987, 38.868532239932264, 48.53867339600887, 38.868532239932264, 19.49079359314398, 5.595847322158511, 0.7042492743008234],
        [1.0, 7.351487533237439, 23.7334715666807, 43.94729005942437, 51.052776432518094, 38.10320082840874, 17.84534704210253, 4.796139898128623, 0.5665254019807355],
    ],
    [
        [0.7042492743008238, 5.595847322158514, 19.490793593143987, 38.868532239932264, 48.53867339600887, 38.868532239932264, 19.49079359314398, 5.595847322158511, 0.7042492743008234],
        [1.0, 7.351487533237439, 23.7334715666807, 43.94729005942437, 51.052776432518094, 38.10320082840874, 17.84534704210253, 4.796139898128623, 0.5665254019807355],
    ],
    [
        [0.7042492743008238, 5.595847322158514, 19.490793593143987, 38.868532239932264, 48.53867339600887, 38.868532239932264, 19.49079359314398, 5.595847322158511, 0.7042492743008234],
        [1.0, 7.351487533237439, 23.7334715666807, 43.94729005942437, 51.052776432518094, 38.10320082840874, 17.84534704210253, 4.796139898128623, 0.5665254019807355],
    ],
    [
        [0.7042492743008238, 5.595847322158514, 19.490793593143987, 38.868532239932264, 48.53867339600887, 38.868532239932264, 19.49079359314398, 5.595847322158511, 0.7042492743008234],
        [1.0, 7.351487533237439, 23.7334715666807, 43.94729005942437, 51.052776432518094, 38.10320082840874, 17.84534704210253, 4.796139898128623, 0.5665254019807355],
    ],
    [
        [0.7042492743008238, 5.595847322158514, 19.490793593143987, 38.868532239932264, 48.53867339600887, 38.868532239932264, 19.49079359314398, 5.595847322158511, 0.7042492743008234],
        [1.0, 7.351487533237439, 23.7334715666807, 43.94729005942437, 51.052776432518094, 38.10320082840874, 17.84534704210253, 4.796139898128623, 0.5665254019807355],
    ],
];

/// 8th-order elliptic lowpass sections for a 5512.5 Hz stream,
/// one per MIDI pitch.
pub(crate) static MIDI_ELLIPTIC_5512_5: MidiTable = [
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.003094862563763469, -0.024541547772543113, 0.08535538621680425, -0.17006539707486645, 0.2123133921693989, -0.17006539707486648, 0.08535538621680426, -0.024541547772543113, 0.003094862563763469],
        [1.0, -7.916463294351019, 27.428966150503147, -54.327253052728665, 67.27805000494754, -53.342774716272416, 26.443791670832784, -7.493747789269431, 0.9294310263758947],
    ],
    [
        [0.0030937977978379404, -0.024506769356689318, 0.0851688743752498, -0.16961531143807881, 0.2117188172999331, -0.16961531143807876, 0.08516887437524978, -0.024506769356689308, 0.0030937977978379386],
        [1.0, -7.910847328485176, 27.391379671132015, -54.219508871332366, 67.10658380518024, -53.17918010088823, 26.35022515872652, -7.464047602809988, 0.9253952685369297],
    ],
    [
        [0.003093018757284575, -0.02447111565263513, 0.08497161828499264, -0.1691346948186758, 0.21108234694766576, -0.16913469481867577, 0.08497161828499263, -0.02447111565263513, 0.0030930187572845744],
        [1.0, -7.904818479849409, 27.35112304198617, -54.10438226037044, 66.92381114673229, -53.00523155708837, 26.250993043835503, -7.432633589300558, 0.9211386541497257],
    ],
    [
        [0.0030925832610728837, -0.024434669233297204, 0.08476301395365603, -0.16862131188675653, 0.210400767952535, -0.1686213118867565, 0.08476301395365603, -0.024434669233297204, 0.0030925832610728845],
        [1.0, -7.898342625913733, 27.30798607895084, -53.98132217974472, 66.72893646326975, -52.82024772657863, 26.1457504442624, -7.399410747717047, 0.9166502936214336],
    ],
    [
        [0.0030925572683507875, -0.024397531797577938, 0.08454242391576917, -0.1680727509935054, 0.20967060343858052, -0.16807275099350544, 0.08454242391576922, -0.02439753179757794, 0.0030925572683507875],
        [1.0, -7.891382461946666, 27.261740179530243, -53.84973255826303, 66.52110424471638, -52.62350076174988, 26.03413181425892, -7.36427936275904, 0.9119189064510397],
    ],
    [
        [0.0030930158979586794, -0.024359826592931927, 0.08430917509920201, -0.16748640992718358, 0.208888091401561, -0.16748640992718358, 0.08430917509920202, -0.02435982659293193, 0.0030930158979586807],
        [1.0, -7.883897174360738, 27.212136578688778, -53.708968403187484, 66.29939439972046, -52.41421321768197, 25.91574984486287, -7.327134853793456, 0.9069328261282696],
    ],
    [
        [0.0030940445704372575, -0.02432170104659124, 0.08406255644227179, -0.16685948066452289, 0.20804916195975554, -0.16685948066452289, 0.08406255644227179, -0.024321701046591242, 0.003094044570437259],
        [1.0, -7.875842078573238, 27.158904437156934, -53.55833158777642, 66.06281730264473, -52.19155478931066, 25.790194341220857, -7.28786763295032, 0.9016800081844225],
    ],
    [
        [0.00309574028764002, -0.024283329606530762, 0.0838018162075974, -0.16618893309756252, 0.20714941330862438, -0.16618893309756252, 0.08380181620759738, -0.02428332960653076, 0.003095740287640019],
        [1.0, -7.867168217464156, 27.101748747696963, -53.39706629822416, 65.81030851911493, -51.95463890137765, 25.65703108481782, -7.246362975450869, 0.8961480418308309],
    ],
    [
        [0.0030982130671922403, -0.024244916787847213, 0.08352615892556299, -0.16547149773114866, 0.20618408646218137, -0.16547149773114864, 0.08352615892556298, -0.02424491678784721, 0.0030982130671922395],
        [1.0, -7.85782191609236, 27.04034804409924, -53.224354122717855, 65.54072320872986, -51.70251916362083, 25.515800691207794, -7.202500905772415, 0.890324165659801],
    ],
    [
        [0.00310158755155189, -0.02420670041293115, 0.08323474188403522, -0.16470364736662949, 0.20514803891811062, -0.1647036473666295, 0.08323474188403523, -0.02420670041293115, 0.0031015875515518895],
        [1.0, -7.847744287869239, 26.97435189708037, -53.039308767493324, 65.25283020959942, -51.434185709712324, 25.366017476685396, -7.156156103851339, 0.8841952879233476],
    ],
    [
        [0.0031060048144102275, -0.024168955024115483, 0.08292667106115933, -0.1638815778139369, 0.2040357174524115, -0.1638815778139369, 0.08292667106115933, -0.02416895502411548, 0.003106004814410227],
        [1.0, -7.836870686883497, 26.903378180836505, -52.84097038801592, 64.94530581727399, -51.14856144594746, 25.207168350728377, -7.10719783620174, 0.8777480119461977],
    ],
    [
        [0.0031116243907290627, -0.024131995434747297, 0.08260099637398417, -0.16300118770875346, 0.20284113033575754, -0.1630011877087535, 0.08260099637398417, -0.024131995434747297, 0.0031116243907290636],
        [1.0, -7.825130100518919, 26.82701009384907, -52.62829952803061, 64.61672728077528, -50.84449824491409, 25.03871175506852, -7.055489917591537, 0.8709686672709973],
    ],
    [
        [0.00311862656098334, -0.02409618036804176, 0.08225670608659787, -0.16205805755560632, 0.20155781937132095, -0.1620580575556063, 0.08225670608659783, -0.024096180368041748, 0.003118626560983338],
        [1.0, -7.812444475906389, 26.744792917742004, -52.40017066557027, 64.26556605132083, -50.52077313064782, 24.860076675006667, -7.000890709777808, 0.8638433471745385],
    ],
    [
        [0.0031272149253322996, -0.02406191611162233, 0.08189272018661875, -0.1610474281736525, 0.20017883228663474, -0.16104742817365247, 0.08189272018661872, -0.024061916111622325, 0.0031272149253322988],
        [1.0, -7.798727973099938, 26.656230498673537, -52.155365373511536, 63.890180835524305, -50.176084515473335, 24.670661754185986, -6.943253164766274, 0.8563579532332362],
    ],
    [
        [0.0031376193096942485, -0.024029660088044302, 0.08150788249748558, -0.15996417879216795, 0.19869669617473826, -0.15996417879216793, 0.08150788249748557, -0.024029660088044295, 0.0031376193096942476],
        [1.0, -7.78388613716321, 26.56078143706939, -51.8925651134487, 63.48881052503626, -49.80904856527404, 24.46983455059585, -6.882424921134568, 0.8484982476529699],
    ],
    [
        [0.0031500990533191156, -0.023999924206218687, 0.08110095124530865, -0.15880280513034797, 0.19710339287756878, -0.15880280513034797, 0.08110095124530865, -0.023999924206218683, 0.0031500990533191147],
        [1.0, -7.767814980596656, 26.457854973662048, -51.610343696137775, 63.05956709954218, -49.418195789788584, 24.256930979221394, -6.81824846315003, 0.8402499141112366],
    ],
    [
        [0.003164946736779404, -0.023973277813437444, 0.08067058774250836, -0.15755739790446605, 0.1953903374429516, -0.15755739790446602, 0.08067058774250835, -0.02397327781343744, 0.0031649467367794028],
        [1.0, -7.750399966727792, 26.346806563038584, -51.307159460302, 62.60042863067717, -49.00196797824361, 24.031254995619907, -6.750561353726452, 0.8315986278868355],
    ],
    [
        [0.00318249242076368, -0.023950350010032578, 0.08021534278588402, -0.15622162233880535, 0.19354836107169893, -0.15622162233880535, 0.08021534278588402, -0.023950350010032578, 0.003182492420763679],
        [1.0, -7.731514883829902, 26.22693313052038, -50.98134724507498, 62.10923255178804, -48.55871562877539, 23.792078584931488, -6.679196553701798, 0.8225301360719588],
    ],
    [
        [0.0032031084801995274, -0.023931831015232694, 0.0797336402945247, -0.15478869941966833, 0.1915677003095212, -0.15478869941966833, 0.0797336402945247, -0.02393183101523269, 0.0032031084801995274],
        [1.0, -7.711020598832607, 26.097468014579057, -50.63111026084728, 61.583669403757455, -48.086696053302994, 23.53864213256131, -6.603982841480015, 0.813030348671359],
    ],
    [
        [0.0032272151357414813, -0.02391847217922239, 0.07922375763453211, -0.1532513898292806, 0.1894379946359222, -0.1532513898292806, 0.07922375763453211, -0.023918472179222394, 0.0032272151357414813],
        [1.0, -7.688763678549323, 25.95757560559766, -50.25451200001562, 61.02127732162428, -47.58407237845715, 23.270155266136364, -6.5247453487590175, 0.8030854413905256],
    ],
    [
        [0.003255286806402998, -0.023911084117238402, 0.07868380199593791, -0.1516019817339658, 0.18714829506478048, -0.15160198173396583, 0.07868380199593793, -0.023911084117238406, 0.0032552868064029987],
        [1.0, -7.664574865382608, 25.806345703185784, -49.84946837455229, 60.41943759193387, -47.048913708518455, 22.9857982734595, -6.44130622985162, 0.7926819708964498],
    ],
    [
        [0.0032878594341941153, -0.02391053228961127, 0.07811168210805303, -0.1498322838840067, 0.18468708690373362, -0.1498322838840067, 0.078111682108053, -0.023910532289611267, 0.0032878594341941153],
        [1.0, -7.638267393495845, 25.642787629150902, -49.413740323079956, 59.77537168819519, -46.47919676874196, 22.684724218150638, -6.353485483977968, 0.7818070032972161],
    ],
    [
        [0.0033255389654507023, -0.023917729157695525, 0.07750507451216335, -0.14793362581588657, 0.18204233042489776, -0.14793362581588657, 0.07750507451216335, -0.023917729157695515, 0.003325538965450701],
        [1.0, -7.609635130481154, 25.465824152467157, -48.94492719813779, 59.086140283117174, -45.872809407529374, 22.36606189351989, -6.261101951835702, 0.7704482565263151],
    ],
    [
        [0.0033690112158971776, -0.023933621797511122, 0.07686138357008826, -0.14589686733423152, 0.17920152387864305, -0.14589686733423152, 0.07686138357008823, -0.023933621797511115, 0.0033690112158971768],
        [1.0, -7.5784505286401345, 25.27428530720375, -48.440461326674, 58.34864484305716, -45.22755640411934, 22.02891977594026, -6.163974509695817, 0.7585942572300572],
    ],
    [
        [0.0034190533996584093, -0.023959173534735784, 0.07617769439709123, -0.14371241989021788, 0.1761517940325942, -0.14371241989021785, 0.07617769439709121, -0.023959173534735777, 0.003419053399658409],
        [1.0, -7.5444623691671096, 25.06690221562993, -47.89760423581008, 57.55963253382062, -44.54116810502432, 21.672391161456023, -6.0619234861685936, 0.7462345126370327],
    ],
    [
        [0.003476547669360566, -0.0239953377554714, 0.07545071800371454, -0.14137028295839038, 0.17288002023355004, -0.14137028295839035, 0.07545071800371451, -0.023995337755471385, 0.0034765476693605643],
        [1.0, -7.507393281838263, 24.842301068109823, -47.31344515405566, 56.71570530879385, -43.811312497215276, 21.295560693320148, -5.954772328556008, 0.7333596977321966],
    ],
    [
        [0.0035424970989075782, -0.0240430215191671, 0.07467672816684891, -0.13886009902617294, 0.16937299886086948, -0.13886009902617294, 0.07467672816684894, -0.024043021519167096, 0.003542497098907579],
        [1.0, -7.46693702233463, 24.59899746074319, -46.6849025379299, 55.81333421103339, -43.03561141836872, 20.89751251316222, -5.8423495472521765, 0.7199618578596002],
    ],
    [
        [0.0036180446473613203, -0.024103035916204444, 0.07385149000504425, -0.1361712313119152, 0.16561765595445052, -0.13617123131191522, 0.07385149000504425, -0.02410303591620445, 0.0036180446473613203],
        [1.0, -7.422755489153113, 24.335391353145877, -46.00872953777965, 54.84888010016884, -42.21166170290168, 20.477340293866447, -5.724490967839785, 0.7060346266316733],
    ],
    [
        [0.0037044957779088054, -0.02417602922342101, 0.07297018102313461, -0.1332928687484785, 0.16160131675003286, -0.13329286874847854, 0.07297018102313464, -0.02417602922342102, 0.003704495777908808],
        [1.0, -7.374475462303056, 24.049762984834768, -45.28152450653979, 53.81862221126294, -41.33706216451481, 20.034159436993384, -5.601042321192412, 0.6915734587239474],
    ],
    [
        [0.003803345578401083, -0.02426239774970319, 0.07202730668640067, -0.130214162989278, 0.15731204184350728, -0.130214162989278, 0.07202730668640067, -0.02426239774970319, 0.0038033455784010827],
        [1.0, -7.321685046793338, 23.740270182361378, -44.49974787259481, 52.71879616262778, -40.409447417573396, 19.5671217403153, -5.4718622018246, 0.6765758767772188],
    ],
    [
        [0.003916311450175029, -0.02436216774084731, 0.07101661463090722, -0.12692440200994706, 0.1527390407714409, -0.12692440200994706, 0.07101661463090721, -0.024362167740847308, 0.003916311450175028],
        [1.0, -7.2639298054721415, 23.4049476040813, -43.659746942842034, 51.54564324676603, -39.42652963497963, 19.075432859860893, -5.336825423683386, 0.6610417312101036],
    ],
    [
        [0.004045372714007112, -0.02447483970629536, 0.06993101477005574, -0.12341322396008846, 0.14787317504314582, -0.12341322396008846, 0.06993101477005574, -0.024474839706295364, 0.004045372714007113],
        [1.0, -7.200708568321025, 23.041708609212943, -42.75779047253805, 50.29547305301642, -38.38614942079912, 18.558372903270296, -5.195826800244248, 0.644973471260584],
    ],
    [
        [0.004192818844869577, -0.024599183874128922, 0.0687625173304215, -0.11967087273269492, 0.14270756432823073, -0.11967087273269492, 0.0687625173304215, -0.024599183874128922, 0.004192818844869577],
        [1.0, -7.13146890911842, 22.648350607106035, -41.790115129396625, 48.964741666896614, -37.28633703013001, 18.01532049399321, -5.0487853718033815, 0.6283764250240628],
    ],
    [
        [0.004361308515649445, -0.02473297194791745, 0.06750220798008173, -0.11568849241595228, 0.1372383120692596, -0.11568849241595229, 0.06750220798008173, -0.02473297194791745, 0.0043613085156494445],
        [1.0, -7.055602285837572, 22.222564946368927, -40.75298628089075, 47.550147847515156, -36.125385180802546, 17.445780634791834, -4.895649096827127, 0.6112590856388208],
    ],
    [
        [0.004553942237596307, -0.024872625618104646, 0.06614028975968371, -0.11145845003783365, 0.13146537114446696, -0.11145845003783364, 0.0661402897596837, -0.02487262561810464, 0.0045539422375963055],
        [1.0, -6.9724388486802695, 21.76195264705139, -39.64277582925634, 46.04874966994444, -34.90193465069352, 16.849416668994927, -4.73640001564493, 0.593633400092261],
    ],
    [
        [0.004774352177036799, -0.025012755942172914, 0.06466623701294598, -0.10697466272037351, 0.1253935779480827, -0.10697466272037351, 0.06466623701294598, -0.025012755942172917, 0.004774352177036799],
        [1.0, -6.881241929826782, 21.264047568029238, -38.45606008225373, 44.45810409225115, -33.61507371389484, 16.226086582728886, -4.571059883105437, 0.575515056392652],
    ],
    [
        [0.005026813764885036, -0.025145559157670812, 0.06306912912666425, -0.10223288328364628, 0.11903389715261614, -0.10223288328364628, 0.06306912912666425, -0.025145559157670812, 0.005026813764885036],
        [1.0, -6.781202242488668, 20.726348941580518, -37.18974084009182, 42.77643171160547, -32.26445220470677, 15.575883803464404, -4.399696251440988, 0.5569237640873197],
    ],
    [
        [0.005316385080954152, -0.025260022904921905, 0.06133826477571707, -0.0972308624646319, 0.1124049441414676, -0.09723086246463189, 0.06133826477571707, -0.025260022904921905, 0.005316385080954152],
        [1.0, -6.67143183452569, 20.146365602803375, -35.84119294289222, 41.00280853930343, -30.850410568346156, 14.899182521027189, -4.222428964828426, 0.5378835223349034],
    ],
    [
        [0.005649081803319406, -0.025340881060667363, 0.05946420505243113, -0.09196824852707382, 0.105534895387116, -0.0919682485270738, 0.05946420505243113, -0.02534088106066735, 0.005649081803319405],
        [1.0, -6.550957864759331, 19.521674696580607, -34.40844137743151, 39.13738586159706, -29.374123610401462, 14.196687377048232, -4.039437002257644, 0.5184228689937873],
    ],
    [
        [0.00603209792188605, -0.02536723380794972, 0.057440462864819436, -0.08644599431067883, 0.0984639714969061, -0.08644599431067881, 0.057440462864819415, -0.025367233807949727, 0.006032097921886048],
        [1.0, -6.418716299437366, 18.849998160357522, -32.890370573681, 37.181638054486115, -27.837757733341427, 13.469487127328039, -3.850965574531516, 0.49857510352568163],
    ],
    [
        [0.006474085644450311, -0.025310719924294844, 0.055266155728777966, -0.08066489965090624, 0.09124780348663568, -0.08066489965090624, 0.05526615572877795, -0.02531071992429484, 0.00647408564445031],
        [1.0, -6.273545663602149, 18.12930085406087, -31.2869675767803, 35.13863646211401, -26.24463917912155, 12.719111568452366, -3.6573333436667537, 0.4783784760108312],
    ],
    [
        [0.006985512280348402, -0.025133087358227692, 0.052950083164887383, -0.07462269613959141, 0.08396220217927128, -0.07462269613959142, 0.052950083164887383, -0.025133087358227703, 0.006985512280348402],
        [1.0, -6.114181029236459, 17.357914829568273, -29.599599152190997, 33.01334499607583, -24.599429106652913, 11.947590626160277, -3.458939587697135, 0.45787633434168734],
    ],
    [
        [0.00757911780472208, -0.024782951442013777, 0.05051689804967341, -0.06830873978364209, 0.07671019388349279, -0.06830873978364209, 0.05051689804967341, -0.02478295144201377, 0.007579117804722077],
        [1.0, -5.9392484812379305, 16.534694881993456, -27.83132029967993, 30.81292983670049, -22.908299142821164, 11.157514022590975, -3.2562710797877195, 0.4371172218677802],
    ],
    [
        [0.008270504900994137, -0.024191451084701325, 0.048016342054057734, -0.06169485242232525, 0.06963274111733421, -0.061694852422325246, 0.04801634205405772, -0.024191451084701318, 0.008270504900994133],
        [1.0, -5.747260376193084, 15.65921117009594, -25.987207766087614, 28.547071417299712, -21.179098279455253, 10.352089373098462, -3.049908386212395, 0.41615491864527415],
    ],
    [
        [0.009078904430820055, -0.023266402738262845, 0.045536950269689624, -0.05472005025172613, 0.0629254560488116, -0.05472005025172612, 0.04553695026968962, -0.02326640273826283, 0.009078904430820052],
        [1.0, -5.536611800811432, 14.731985279196826, -24.07470651755242, 26.228261723781806, -19.421498580199426, 9.53519592238651, -2.840531211028877, 0.39504842135969],
    ],
    [
        [0.010028174758752294, -0.02188439649974867, 0.043226259725581105, -0.04726567580274949, 0.056865021482912344, -0.047265675802749464, 0.0432262597255811, -0.021884396499748653, 0.010028174758752288],
        [1.0, -5.305578750597338, 13.754776543941135, -22.10396921993906, 23.87206396864446, -17.647103065285382, 8.711430444235454, -2.6289223228002134, 0.37386186049308207],
    ],
    [
        [0.011148115007245671, -0.019880059127947484, 0.04132046880281075, -0.03911559677749232, 0.051851240212924865, -0.03911559677749232, 0.041320468802810734, -0.01988005912794748, 0.011148115007245671],
        [1.0, -5.052318689481604, 12.730925626774487, -20.088157944384275, 21.497305286597246, -15.869494344369933, 7.886141158609398, -2.4159694845299526, 0.3526643592721647],
    ],
    [
        [0.012476202838282326, -0.017031397000614297, 0.04018781799074283, -0.02989333712030856, 0.04847406060242253, -0.02989333712030856, 0.04018781799074284, -0.017031397000614297, 0.012476202838282326],
        [1.0, -4.774874323163803, 11.665762082908158, -18.043662846524892, 19.12616707003214, -14.104197090650384, 7.065444970926474, -2.2026646613898047, 0.33152984878053343],
    ],
    [
        [0.014059910743774627, -0.013039687196707344, 0.04039188435404654, -0.01896379826166927, 0.047620204467880976, -0.01896379826166926, 0.040391884354046524, -0.013039687196707344, 0.01405991074377462],
        [1.0, -4.471181629271509, 10.56708168178357, -15.990173718342046, 16.78413342256188, -12.368521345529599, 6.256223091483924, -1.9900995821976644, 0.3105368697067782],
    ],
    [
        [0.015959817032927356, -0.0075017468727513305, 0.04278377578970175, -0.005280929446332921, 0.05064208454323311, -0.005280929446332893, 0.042783775789701765, -0.0075017468727513244, 0.015959817032927356],
        [1.0, -4.139083443669142, 9.445697248635692, -13.950516413139031, 14.499758501236741, -10.681246953462253, 5.466090447433287, -1.7794564438454552, 0.2897684175512042],
    ],
    [
        [0.018253817696513398, 0.00012850875846843045, 0.0486362749073905, 0.012846679603654869, 0.05962390721107917, 0.012846679603654864, 0.04863627490739051, 0.00012850875846843248, 0.018253817696513398],
        [1.0, -3.7763502130818662, 8.316063260022586, -11.950136800001868, 12.304222296517906, -9.062102075062512, 4.703335744996675, -1.5719921065413094, 0.26931193172454115],
    ],
    [
        [0.021042876738698778, 0.01059364275333596, 0.05983889533956738, 0.0381142211702392, 0.07779818503823577, 0.0381142211702392, 0.05983889533956737, 0.010593642753335962, 0.021042876738698774],
        [1.0, -3.3807098995586142, 7.1969687332709364, -10.016080318486079, 10.230667827569395, -7.530980287384556, 3.9768323785244535, -1.3690134095359912, 0.2492596022728786],
    ],
    [
        [0.02445894634313695, 0.024907772488285882, 0.07918141471516289, 0.0747655358466303, 0.11019314492376578, 0.07476553584663032, 0.07918141471516288, 0.02490777248828587, 0.02445894634313694],
        [1.0, -2.9498894730682403, 6.11228424757082, -8.175276722444021, 8.31335977440911, -6.106830022820237, 3.2959269419754627, -1.171840016473363, 0.2297092934684243],
    ],
    [
        [0.02867597691261294, 0.044462355844578465, 0.11076594737102324, 0.1294168144074488, 0.16463164065613053, 0.12941681440744882, 0.11076594737102327, 0.044462355844578465, 0.02867597691261294],
        [1.0, -2.4816709658865395, 5.091736135690412, -6.451900557562719, 6.586787651107716, -4.806134151989141, 2.670324096891811, -0.9817490592528939, 0.21076660277546416],
    ],
    [
        [0.0339253716762506, 0.07117608548520336, 0.16060574157535787, 0.21229493994335172, 0.25326050527665417, 0.21229493994335172, 0.16060574157535787, 0.07117608548520335, 0.03392537167625059],
        [1.0, -1.9739656962958994, 4.171662624387123, -4.863544918988305, 5.0849719326319125, -3.6408704249767347, 2.110007756033106, -0.7998920119769494, 0.19254896491967455],
    ],
    [
        [0.040517902326586364, 0.10770848117359308, 0.23749505706032123, 0.33908843061949356, 0.3948727760705881, 0.3390884306194935, 0.23749505706032117, 0.10770848117359302, 0.040517902326586336],
        [1.0, -1.424911004823012, 3.3956813271295765, -3.41593085312873, 3.841438308635902, -2.6157938338716646, 1.6252754363120616, -0.6271672329556262, 0.1751934239107205],
    ],
    [
        [0.04887512131882825, 0.15776596138750992, 0.3542720296950853, 0.5336965059170795, 0.6184023688243125, 0.5336965059170795, 0.35427202969508537, 0.15776596138750995, 0.04887512131882826],
        [1.0, -0.832994678238, 2.815163114502121, -2.0958969929337465, 2.89062260012152, -1.724789226317177, 1.2270265010247254, -0.4640186979786464, 0.15887102429234612],
    ],
    [
        [0.059574894440855966, 0.22654285402648067, 0.5296497445069142, 0.8322823289298178, 0.9681305396364496, 0.8322823289298176, 0.5296497445069142, 0.2265428540264806, 0.059574894440855966],
        [1.0, -0.197213137457387, 2.489362028874504, -0.8625046468287766, 2.271867828573883, -0.945871971614195, 0.9275556223030523, -0.31010731975838124, 0.14381330273441373],
    ],
    [
        [0.0734181799330512, 0.3213601672083867, 0.7908651305701572, 1.2891965928659872, 1.5113521629297664, 1.2891965928659872, 0.7908651305701572, 0.32136016720838667, 0.0734181799330512],
        [1.0, 0.48272962922813006, 2.484992825893144, 0.36370042709980677, 2.0376606015715155, -0.23411139604621306, 0.742294830538571, -0.16375567056115603, 0.13036128886896786],
    ],
    [
        [0.09152816579793671, 0.4525951231800016, 1.177496035209378, 1.9855379026144373, 2.3495030895206743, 1.9855379026144366, 1.177496035209378, 0.45259512318000156, 0.09152816579793667],
        [1.0, 1.2061746065447663, 2.874975896703981, 1.7128384775262602, 2.2682503134796463, 0.4887621438034669, 0.6932813250306931, -0.02097990709753096, 0.11905724851437254],
    ],
    [
        [0.11549927133587232, 0.6350386148386674, 1.7469257854251448, 3.041338638133884, 3.634013532678687, 3.0413386381338823, 1.7469257854251439, 0.6350386148386671, 0.11549927133587225],
        [1.0, 1.9712033874970636, 3.7359837951812325, 3.3781570660800457, 3.0950982467775057, 1.3501227224662664, 0.8157065478701118, 0.1262451017730005, 0.11081946340106466],
    ],
    [
        [0.1476237854978847, 0.8898802392249907, 2.582080065688307, 4.632540991251874, 5.58831841402448, 4.632540991251874, 2.5820800656883076, 0.889880239224991, 0.14762378549788477],
        [1.0, 2.7742678383021415, 5.144323919405203, 5.626616028327145, 4.735265820789662, 2.5508202664011934, 1.1698916764271359, 0.2931676897213624, 0.1072823249194959],
    ],
    [
        [0.1912401383846962, 1.2476016994659966, 3.802168623406001, 7.013861487474265, 8.537235415809873, 7.013861487474265, 3.8021686234060015, 1.2476016994659966, 0.19124013838469614],
        [1.0, 3.609741658781738, 7.169566851912149, 8.803706807159065, 7.536974287506688, 4.402788223740827, 1.8626784036590212, 0.5082056346621963, 0.11147407601827578],
    ],
    [
        [0.2512709460757572, 1.7521383145377685, 5.577049258040684, 10.547801869502575, 12.943574182974151, 10.547801869502575, 5.577049258040683, 1.7521383145377682, 0.2512709460757572],
        [1.0, 4.469365715113051, 9.86511389218322, 13.325933925889354, 12.03144769493236, 7.385334723077518, 3.0847733927888585, 0.8242122519704437, 0.12920226874705093],
    ],
    [
        [0.33504796293571987, 2.4666387597789163, 8.14490031181777, 15.736980083834366, 19.447405497757135, 15.736980083834366, 8.14490031181777, 2.4666387597789163, 0.3350479629357198],
        [1.0, 5.3414883122678205, 13.254310214268585, 19.649828474572022, 18.974561438439544, 12.223079488694427, 5.173881603498221, 1.3399637394316146, 0.17195918965680668],
    ],
    [
        [0.4535232860088639, 3.480579989536404, 11.829201125361827, 23.247307553249684, 28.890332021308563, 23.247307553249684, 11.829201125361829, 3.480579989536406, 0.4535232860088639],
        [1.0, 6.209720059723019, 17.308707556778426, 28.197214000919523, 29.337163756563807, 19.974531813009644, 8.715118963671424, 2.2408555725434156, 0.26315215974301664],
    ],
    [
        [0.6227776841234227, 4.915187317199092, 17.0379983710653, 33.87971846479065, 42.26825954660603, 33.87971846479064, 17.037998371065296, 4.91518731719909, 0.6227776841234222],
        [1.0, 7.049569112338632, 21.908100216828092, 39.193958530864194, 44.149272006208534, 32.070776689721356, 14.678331385644622, 3.8729779460580787, 0.4516080807497132],
    ],
    [
        [0.7042492743008238, 5.595847322158514, 19.490793593143987, 38.868532239932264, 48.53867339600887, 38.868532239932264, 19.49079359314398, 5.595847322158511, 0.7042492743008234],
        [1.0, 7.351487533237439, 23.7334715666807, 43.94729005942437, 51.052776432518094, 38.10320082840874, 17.84534704210253, 4.796139898128623, 0.5665254019807355],
    ],
    [
        [0.7042492743008238, 5.595847322158514, 19.490793593143987, 38.868532239932264, 48.53867339600887, 38.868532239932264, 19.49079359314398, 5.595847322158511, 0.7042492743008234],
        [1.0, 7.351487533237439, 23.7334715666807, 43.94729005942437, 51.052776432518094, 38.10320082840874, 17.84534704210253, 4.796139898128623, 0.5665254019807355],
    ],
    [
        [0.7042492743008238, 5.595847322158514, 19.490793593143987, 38.868532239932264, 48.53867339600887, 38.868532239932264, 19.49079359314398, 5.595847322158511, 0.7042492743008234],
        [1.0, 7.351487533237439, 23.7334715666807, 43.94729005942437, 51.052776432518094, 38.10320082840874, 17.84534704210253, 4.796139898128623, 0.5665254019807355],
    ],
    [
        [0.7042492743008238, 5.595847322158514, 19.490793593143987, 38.868532239932264, 48.53867339600887, 38.868532239932264, 19.49079359314398, 5.595847322158511, 0.7042492743008234],
        [1.0, 7.351487533237439, 23.7334715666807, 43.94729005942437, 51.052776432518094, 38.10320082840874, 17.84534704210253, 4.796139898128623, 0.5665254019807355],
    ],
    [
        [0.7042492743008238, 5.595847322158514, 19.490793593143987, 38.868532239932264, 48.53867339600887, 38.868532239932264, 19.49079359314398, 5.595847322158511, 0.7042492743008234],
        [1.0, 7.351487533237439, 23.7334715666807, 43.94729005942437, 51.052776432518094, 38.10320082840874, 17.84534704210253, 4.796139898128623, 0.5665254019807355],
    ],
    [
        [0.7042492743008238, 5.595847322158514, 19.490793593143987, 38.868532239932264, 48.53867339600887, 38.868532239932264, 19.49079359314398, 5.595847322158511, 0.7042492743008234],
        [1.0, 7.351487533237439, 23.7334715666807, 43.94729005942437, 51.052776432518094, 38.10320082840874, 17.84534704210253, 4.796139898128623, 0.5665254019807355],
    ],
    [
        [0.7042492743008238, 5.595847322158514, 19.490793593143987, 38.868532239932264, 48.53867339600887, 38.868532239932264, 19.49079359314398, 5.595847322158511, 0.7042492743008234],
        [1.0, 7.351487533237439, 23.7334715666807, 43.94729005942437, 51.052776432518094, 38.10320082840874, 17.84534704210253, 4.796139898128623, 0.5665254019807355],
    ],
    [
        [0.7042492743008238, 5.595847322158514, 19.490793593143987, 38.868532239932264, 48.53867339600887, 38.868532239932264, 19.49079359314398, 5.595847322158511, 0.7042492743008234],
        [1.0, 7.351487533237439, 23.7334715666807, 43.94729005942437, 51.052776432518094, 38.10320082840874, 17.84534704210253, 4.796139898128623, 0.5665254019807355],
    ],
    [
        [0.7042492743008238, 5.595847322158514, 19.490793593143987, 38.868532239932264, 48.53867339600887, 38.868532239932264, 19.49079359314398, 5.595847322158511, 0.7042492743008234],
        [1.0, 7.351487533237439, 23.7334715666807, 43.94729005942437, 51.052776432518094, 38.10320082840874, 17.84534704210253, 4.796139898128623, 0.5665254019807355],
    ],
    [
        [0.7042492743008238, 5.595847322158514, 19.490793593143987, 38.868532239932264, 48.53867339600887, 38.868532239932264, 19.49079359314398, 5.595847322158511, 0.7042492743008234],
        [1.0, 7.351487533237439, 23.7334715666807, 43.94729005942437, 51.052776432518094, 38.10320082840874, 17.84534704210253, 4.796139898128623, 0.5665254019807355],
    ],
    [
        [0.7042492743008238, 5.595847322158514, 19.490793593143987, 38.868532239932264, 48.53867339600887, 38.868532239932264, 19.49079359314398, 5.595847322158511, 0.7042492743008234],
        [1.0, 7.351487533237439, 23.7334715666807, 43.94729005942437, 51.052776432518094, 38.10320082840874, 17.84534704210253, 4.796139898128623, 0.5665254019807355],
    ],
    [
        [0.7042492743008238, 5.595847322158514, 19.490793593143987, 38.868532239932264, 48.53867339600887, 38.868532239932264, 19.49079359314398, 5.595847322158511, 0.7042492743008234],
        [1.0, 7.351487533237439, 23.7334715666807, 43.94729005942437, 51.052776432518094, 38.10320082840874, 17.84534704210253, 4.796139898128623, 0.5665254019807355],
    ],
    [
        [0.7042492743008238, 5.595847322158514, 19.490793593143987, 38.868532239932264, 48.53867339600887, 38.868532239932264, 19.49079359314398, 5.595847322158511, 0.7042492743008234],
        [1.0, 7.351487533237439, 23.7334715666807, 43.94729005942437, 51.052776432518094, 38.10320082840874, 17.84534704210253, 4.796139898128623, 0.5665254019807355],
    ],
    [
        [0.7042492743008238, 5.595847322158514, 19.490793593143987, 38.868532239932264, 48.53867339600887, 38.868532239932264, 19.49079359314398, 5.595847322158511, 0.7042492743008234],
        [1.0, 7.351487533237439, 23.7334715666807, 43.94729005942437, 51.052776432518094, 38.10320082840874, 17.84534704210253, 4.796139898128623, 0.5665254019807355],
    ],
    [
        [0.7042492743008238, 5.595847322158514, 19.490793593143987, 38.868532239932264, 48.53867339600887, 38.868532239932264, 19.49079359314398, 5.595847322158511, 0.7042492743008234],
        [1.0, 7.351487533237439, 23.7334715666807, 43.94729005942437, 51.052776432518094, 38.10320082840874, 17.84534704210253, 4.796139898128623, 0.5665254019807355],
    ],
    [
        [0.7042492743008238, 5.595847322158514, 19.490793593143987, 38.868532239932264, 48.53867339600887, 38.868532239932264, 19.49079359314398, 5.595847322158511, 0.7042492743008234],
        [1.0, 7.351487533237439, 23.7334715666807, 43.94729005942437, 51.052776432518094, 38.10320082840874, 17.84534704210253, 4.796139898128623, 0.5665254019807355],
    ],
    [
        [0.7042492743008238, 5.595847322158514, 19.490793593143987, 38.868532239932264, 48.53867339600887, 38.868532239932264, 19.49079359314398, 5.595847322158511, 0.7042492743008234],
        [1.0, 7.351487533237439, 23.7334715666807, 43.94729005942437, 51.052776432518094, 38.10320082840874, 17.84534704210253, 4.796139898128623, 0.5665254019807355],
    ],
    [
        [0.7042492743008238, 5.595847322158514, 19.490793593143987, 38.868532239932264, 48.53867339600887, 38.868532239932264, 19.49079359314398, 5.595847322158511, 0.7042492743008234],
        [1.0, 7.351487533237439, 23.7334715666807, 43.94729005942437, 51.052776432518094, 38.10320082840874, 17.84534704210253, 4.796139898128623, 0.5665254019807355],
    ],
    [
        [0.7042492743008238, 5.595847322158514, 19.490793593143987, 38.868532239932264, 48.53867339600887, 38.868532239932264, 19.49079359314398, 5.595847322158511, 0.7042492743008234],
        [1.0, 7.351487533237439, 23.7334715666807, 43.94729005942437, 51.052776432518094, 38.10320082840874, 17.84534704210253, 4.796139898128623, 0.5665254019807355],
    ],
    [
        [0.7042492743008238, 5.595847322158514, 19.490793593143987, 38.868532239932264, 48.53867339600887, 38.868532239932264, 19.49079359314398, 5.595847322158511, 0.7042492743008234],
        [1.0, 7.351487533237439, 23.7334715666807, 43.94729005942437, 51.052776432518094, 38.10320082840874, 17.84534704210253, 4.796139898128623, 0.5665254019807355],
    ],
    [
        [0.7042492743008238, 5.595847322158514, 19.490793593143987, 38.868532239932264, 48.53867339600887, 38.868532239932264, 19.49079359314398, 5.595847322158511, 0.7042492743008234],
        [1.0, 7.351487533237439, 23.7334715666807, 43.94729005942437, 51.052776432518094, 38.10320082840874, 17.84534704210253, 4.796139898128623, 0.5665254019807355],
    ],
    [
        [0.7042492743008238, 5.595847322158514, 19.490793593143987, 38.868532239932264, 48.53867339600887, 38.868532239932264, 19.49079359314398, 5.595847322158511, 0.7042492743008234],
        [1.0, 7.351487533237439, 23.7334715666807, 43.94729005942437, 51.052776432518094, 38.10320082840874, 17.84534704210253, 4.796139898128623, 0.5665254019807355],
    ],
    [
        [0.7042492743008238, 5.595847322158514, 19.490793593143987, 38.868532239932264, 48.53867339600887, 38.868532239932264, 19.49079359314398, 5.595847322158511, 0.7042492743008234],
        [1.0, 7.351487533237439, 23.7334715666807, 43.94729005942437, 51.052776432518094, 38.10320082840874, 17.84534704210253, 4.796139898128623, 0.5665254019807355],
    ],
    [
        [0.7042492743008238, 5.595847322158514, 19.490793593143987, 38.868532239932264, 48.53867339600887, 38.868532239932264, 19.49079359314398, 5.595847322158511, 0.7042492743008234],
        [1.0, 7.351487533237439, 23.7334715666807, 43.94729005942437, 51.052776432518094, 38.10320082840874, 17.84534704210253, 4.796139898128623, 0.5665254019807355],
    ],
    [
        [0.7042492743008238, 5.595847322158514, 19.490793593143987, 38.868532239932264, 48.53867339600887, 38.868532239932264, 19.49079359314398, 5.595847322158511, 0.7042492743008234],
        [1.0, 7.351487533237439, 23.7334715666807, 43.94729005942437, 51.052776432518094, 38.10320082840874, 17.84534704210253, 4.796139898128623, 0.5665254019807355],
    ],
    [
        [0.7042492743008238, 5.595847322158514, 19.490793593143987, 38.868532239932264, 48.53867339600887, 38.868532239932264, 19.49079359314398, 5.595847322158511, 0.7042492743008234],
        [1.0, 7.351487533237439, 23.7334715666807, 43.94729005942437, 51.052776432518094, 38.10320082840874, 17.84534704210253, 4.796139898128623, 0.5665254019807355],
    ],
    [
        [0.7042492743008238, 5.595847322158514, 19.490793593143987, 38.868532239932264, 48.53867339600887, 38.868532239932264, 19.49079359314398, 5.595847322158511, 0.7042492743008234],
        [1.0, 7.351487533237439, 23.7334715666807, 43.94729005942437, 51.052776432518094, 38.10320082840874, 17.84534704210253, 4.796139898128623, 0.5665254019807355],
    ],
    [
        [0.7042492743008238, 5.595847322158514, 19.490793593143987, 38.868532239932264, 48.53867339600887, 38.868532239932264, 19.49079359314398, 5.595847322158511, 0.7042492743008234],
        [1.0, 7.351487533237439, 23.7334715666807, 43.94729005942437, 51.052776432518094, 38.10320082840874, 17.84534704210253, 4.796139898128623, 0.5665254019807355],
    ],
];

/// 8th-order elliptic lowpass sections for a 4410 Hz stream,
/// one per MIDI pitch.
pub(crate) static MIDI_ELLIPTIC_4410: MidiTable = [
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030950276358120235, -0.02454623572577164, 0.08538010897437347, -0.17012473854775592, 0.21239167536022005, -0.1701247385477559, 0.08538010897437347, -0.024546235725771633, 0.0030950276358120226],
        [1.0, -7.917201553730729, 27.433913518229268, -54.34145360659406, 67.3006793871887, -53.364395080652415, 26.456174935570118, -7.497684376064232, 0.9299667760888614],
    ],
    [
        [0.0030939278520818337, -0.024511582566373518, 0.08519502240231162, -0.16967866675303764, 0.2118025981831568, -0.1696786667530377, 0.08519502240231164, -0.02451158256637352, 0.0030939278520818337],
        [1.0, -7.911639604855297, 27.396677081909843, -54.23467927355273, 67.13070186016719, -53.20216697259215, 26.363358101571013, -7.468211612495049, 0.9259604199034447],
    ],
    [
        [0.0030931064620784124, -0.024476044180215917, 0.0849992717505561, -0.16920235693897365, 0.21117204589724425, -0.16920235693897365, 0.08499927175055609, -0.02447604418021591, 0.0030931064620784115],
        [1.0, -7.905669212438934, 27.356797919184775, -54.12059462686243, 66.94952233809383, -53.02967473737071, 26.264921318395075, -7.437037665902581, 0.9217346669900869],
    ],
    [
        [0.003092620243800496, -0.024439700699678876, 0.08479225745383713, -0.16869359685341506, 0.21049683984414758, -0.16869359685341506, 0.08479225745383713, -0.024439700699678872, 0.0030926202438004958],
        [1.0, -7.899256665874112, 27.314068239723, -53.99865450385232, 66.75635311501625, -52.84624314633014, 26.160522448307834, -7.404068168330174, 0.9172786814807804],
    ],
    [
        [0.003092533984664978, -0.024402651067562224, 0.08457334674890657, -0.16814999979823433, 0.20977354047541133, -0.16814999979823433, 0.08457334674890657, -0.024402651067562224, 0.0030925339846649773],
        [1.0, -7.89236511449826, 27.268262061258632, -53.868269219227976, 66.55034715188717, -52.651150894571984, 26.049798838004936, -7.369204058780635, 0.9125812361515915],
    ],
    [
        [0.0030929214853276685, -0.024365015431410883, 0.08434187157152051, -0.16756899052059784, 0.20899842612430292, -0.16756899052059784, 0.08434187157152051, -0.024365015431410886, 0.003092921485327668],
        [1.0, -7.884954245512667, 27.21913348727677, -53.728800717200464, 66.33059348154507, -52.443627514522134, 25.93236622296589, -7.3323414311206765, 0.9076307169219702],
    ],
    [
        [0.003093866684077422, -0.024326937746016984, 0.08409712621059127, -0.16694779010331812, 0.20816747043799014, -0.16694779010331806, 0.08409712621059127, -0.024326937746016984, 0.0030938666840774212],
        [1.0, -7.876979926922233, 27.16641481908824, -53.57955840421832, 66.09611229932074, -52.22285013393486, 25.80781760753027, -7.293371390753179, 0.9024151304493322],
    ],
    [
        [0.00309546491664861, -0.024288588585796418, 0.08383836466718642, -0.16628339983258444, 0.20727631850576006, -0.16628339983258444, 0.0838383646671864, -0.024288588585796418, 0.00309546491664861],
        [1.0, -7.868393811632645, 27.109814487894084, -53.41979464358087, 65.8458497327773, -51.98794008537497, 25.675722128624606, -7.252179923070596, 0.8969221152493386],
    ],
    [
        [0.0030978243283812253, -0.02425016816355499, 0.08356479765321094, -0.1655725840359386, 0.20632026175970478, -0.16557258403593858, 0.08356479765321094, -0.02425016816355499, 0.0030978243283812253],
        [1.0, -7.859142898425966, 27.049014791704067, -53.248699894427844, 65.57867228848335, -51.73795937890851, 25.5356239133844, -7.208647777218468, 0.8911389568113284],
    ],
    [
        [0.003101067458114483, -0.024211909545150814, 0.08327558914883465, -0.16481185190290085, 0.20529421177669008, -0.1648118519029009, 0.08327558914883468, -0.024211909545150817, 0.0031010674581144837],
        [1.0, -7.849169045079571, 26.98366942135244, -53.06539747963161, 65.29336097955232, -51.47190705559942, 25.387040943689627, -7.162650369283753, 0.8850526072185637],
    ],
    [
        [0.0031053330161121247, -0.024174082040227418, 0.0829698524184388, -0.1639974383263635, 0.20419267317701573, -0.16399743832636354, 0.08296985241843882, -0.02417408204022743, 0.003105333016112126],
        [1.0, -7.838408428394016, 26.913400759408738, -52.86893797020173, 64.98860514531069, -51.18871544669612, 25.229463943945863, -7.114057709688361, 0.8786497098241652],
    ],
    [
        [0.0031107778817905402, -0.024136994736914687, 0.08264664536140436, -0.1631252838362015, 0.2030097158989604, -0.16312528383620156, 0.08264664536140441, -0.024136994736914694, 0.0031107778817905415],
        [1.0, -7.826790945350014, 26.837796935583082, -52.65829317821921, 64.66299598426495, -50.887246372359996, 25.062355312375104, -7.062734360319324, 0.8719166295749615],
    ],
    [
        [0.003117579351185815, -0.024101000132389055, 0.08230496504572568, -0.16219101373925607, 0.20173894723284627, -0.16219101373925604, 0.08230496504572565, -0.02410100013238904, 0.003117579351185813],
        [1.0, -7.81423954902092, 26.756408622372078, -52.43234975640494, 64.31501983401486, -50.56628732476384, 24.88514812073421, -7.008539427773799, 0.8648394896165539],
    ],
    [
        [0.003125937669118005, -0.024066497790464877, 0.08194374123843134, -0.16118991663401797, 0.20037348412736375, -0.16118991663401794, 0.08194374123843133, -0.02406649779046487, 0.003125937669118004],
        [1.0, -7.8006695122227745, 26.668745555301093, -52.18990241060284, 63.94305124746147, -50.224547693729704, 24.69724521285531, -6.951326600045796, 0.857404214852575],
    ],
    [
        [0.0031360788870979724, -0.02403393793071136, 0.08156182870633884, -0.16011692253645674, 0.19890592643918914, -0.16011692253645674, 0.08156182870633882, -0.024033937930711357, 0.0031360788870979715],
        [1.0, -7.785987611187628, 26.57427276334386, -51.92964674223752, 63.545345934247266, -49.86065510919744, 24.498018438820953, -6.890944235040081, 0.8495965831683769],
    ],
    [
        [0.003148258095435796, -0.024003824819383776, 0.08115799801302057, -0.1589665809384681, 0.1973283319895275, -0.1589665809384681, 0.08115799801302055, -0.02400382481938377, 0.0031482580954357953],
        [1.0, -7.770091220797029, 26.472406497131225, -51.65017175179571, 63.12003366061739, -49.47315199419174, 24.286808069074844, -6.82723551047412, 0.8414022850629203],
    ],
    [
        [0.0031627630870793154, -0.02397671978872808, 0.08073092448241995, -0.15773303922576618, 0.19563219452367916, -0.15773303922576615, 0.08073092448241992, -0.023976719788728076, 0.0031627630870793145],
        [1.0, -7.752867312111617, 26.36250984563402, -51.34995205231439, 62.665111230694144, -49.06049244510236, 24.06292244145784, -6.760038646025188, 0.8328069924607336],
    ],
    [
        [0.003179918521853355, -0.023953243655434796, 0.08027917493607213, -0.15641002201175366, 0.1938084259481297, -0.15641002201175366, 0.08027917493607212, -0.023953243655434792, 0.0031799185218533543],
        [1.0, -7.734191342082209, 26.24388803641651, -51.02733986460915, 62.1784357085419, -48.621039583594715, 23.825637904192256, -6.689187210000742, 0.8237964374966785],
    ],
    [
        [0.0032000906735091005, -0.023934078237938947, 0.0798011917396357, -0.15499081210244758, 0.19184734455020766, -0.1549908121024476, 0.07980119173963571, -0.023934078237938947, 0.0032000906735090997],
        [1.0, -7.713926024431666, 26.11578342067119, -50.68055689457351, 61.65771808452418, -48.153063556943934, 23.574199129351893, -6.6145105243542135, 0.8143565020774968],
    ],
    [
        [0.0032236928589944444, -0.023919966581751266, 0.07929527361672015, -0.15346823400000817, 0.18973867129436922, -0.15346823400000822, 0.07929527361672016, -0.023919966581751266, 0.0032236928589944444],
        [1.0, -7.6919199697627665, 25.977370152515395, -50.30768622854319, 61.10051764262852, -47.65474040170415, 23.307819884490524, -6.535834183531992, 0.8044733190233231],
    ],
    [
        [0.0032511916704605964, -0.023911711386719294, 0.07875955260657026, -0.15183464108416478, 0.18747153674247075, -0.15183464108416478, 0.07875955260657026, -0.02391171138671929, 0.0032511916704605955],
        [1.0, -7.6680061819859935, 25.827748583009058, -49.90666442685482, 60.504237349082445, -47.12415203005668, 23.025684364975213, -6.452980704408524, 0.7941333855762838],
    ],
    [
        [0.003283114156796775, -0.023910170983169596, 0.07819196646223754, -0.1500819078873423, 0.18503450166801516, -0.15008190788734233, 0.07819196646223756, -0.0239101709831696, 0.003283114156796775],
        [1.0, -7.642000397188521, 25.665939403721445, -49.47527404997376, 59.86612065825564, -46.55928764959825, 22.726949206280253, -6.36577032642763, 0.7833236900287915],
    ],
    [
        [0.0033200561342903914, -0.02391625201631354, 0.0775902257161893, -0.14820142920546278, 0.18241559502967572, -0.14820142920546273, 0.07759022571618926, -0.023916252016313522, 0.0033200561342903883],
        [1.0, -7.613699250103637, 25.49087759326259, -49.01113691777232, 59.18325022114851, -45.95804698633664, 22.410746314095, -6.274021982990652, 0.7720318521672026],
    ],
    [
        [0.0033626918470758475, -0.02393089775843419, 0.07695177459505796, -0.14618412816564486, 0.17960237363856196, -0.14618412816564486, 0.07695177459505796, -0.02393089775843419, 0.0033626918470758475],
        [1.0, -7.582878252418096, 25.301406244010547, -48.511708482792656, 58.452549086318406, -45.31824574773724, 22.076186670569694, -6.177554467074824, 0.7602462781429785],
    ],
    [
        [0.003411785249571307, -0.023955070660886185, 0.07627374496652407, -0.14402047580446495, 0.1765820085946605, -0.14402047580446498, 0.07627374496652409, -0.023955070660886185, 0.003411785249571308],
        [1.0, -7.54928956631337, 25.096270376529542, -47.97427379491506, 57.67078510440227, -44.63762383807778, 21.722365297264755, -6.076187815971837, 0.747956330268682],
    ],
    [
        [0.003468203247943465, -0.02398972736265151, 0.07555290258293317, -0.14170052519014767, 0.17334140437501708, -0.14170052519014767, 0.07555290258293317, -0.02398972736265151, 0.003468203247943464],
        [1.0, -7.512659555927342, 24.874110887356636, -47.3959456502206, 56.83457938670256, -43.913856922043706, 21.348367579144256, -5.969744941831564, 0.7351525120851907],
    ],
    [
        [0.003532931319428885, -0.02403578386236514, 0.07478558509886213, -0.13921396363236957, 0.1698673573201749, -0.13921396363236957, 0.07478558509886213, -0.024035783862365136, 0.0035329313194288857],
        [1.0, -7.472686098914004, 24.633458823697453, -46.77366565350455, 55.94041982635951, -43.14457202384168, 20.953277178852243, -5.858053536278782, 0.7218266688539919],
    ],
    [
        [0.003607092031780461, -0.024094067900780357, 0.07396763175867922, -0.13655018702963784, 0.1661467611746383, -0.13655018702963784, 0.07396763175867922, -0.024094067900780357, 0.0036070920317804603],
        [1.0, -7.429035640057327, 24.372730238212934, -46.10420908430545, 54.98468086737712, -42.3273679468071, 20.536185795888954, -5.740948278615389, 0.7079722033891671],
    ],
    [
        [0.0036919671162951037, -0.024165254743012458, 0.07309430538568103, -0.1336984008421013, 0.16216686828212312, -0.1336984008421013, 0.07309430538568103, -0.024165254743012458, 0.0036919671162951046],
        [1.0, -7.381339969073837, 24.090221950981984, -45.38419464259538, 53.963650900878406, -41.45984140018254, 20.09620505021595, -5.618273377865478, 0.6935843068521832],
    ],
    [
        [0.0037890239147517456, -0.024249781430678, 0.07216020851787666, -0.13064775243483426, 0.15791561601875104, -0.13064775243483426, 0.07216020851787666, -0.024249781430678005, 0.0037890239147517456],
        [1.0, -7.329192705458729, 23.784108636801452, -44.61010036389274, 52.87356887626039, -40.53961982170597, 19.63248079293104, -5.489885478966257, 0.6786602037839254],
    ],
    [
        [0.0038999472335326125, -0.024347733107005096, 0.07115919746094715, -0.12738749942419816, 0.1533820290981781, -0.12738749942419816, 0.07115919746094716, -0.024347733107005103, 0.0038999472335326133],
        [1.0, -7.272145474672254, 23.45244176762247, -43.77828723479453, 51.71067193158623, -39.56440198126646, 19.14421016614819, -5.355656962510385, 0.6631994102380802],
    ],
    [
        [0.004026677910873375, -0.024458693086255093, 0.07008430100463023, -0.12390721786776945, 0.14855670959553685, -0.12390721786776947, 0.07008430100463026, -0.024458693086255093, 0.004026677910873375],
        [1.0, -7.209703762352405, 23.093151076010766, -42.885032307129656, 50.47125606310691, -38.532007534115664, 18.630661747675227, -5.215479665309875, 0.647204003404675],
    ],
    [
        [0.004171459753650537, -0.024581545783315034, 0.06892765506248769, -0.12019705216658097, 0.1434324281268093, -0.12019705216658097, 0.0689276550624877, -0.024581545783315038, 0.004171459753650537],
        [1.0, -7.141322436859444, 22.70404937046565, -41.92657339748504, 49.15175205381445, -37.44043675079115, 18.091199120361743, -5.0692690453287685, 0.6306789005706761],
    ],
    [
        [0.004336896952383806, -0.024714218222710534, 0.06768047124839428, -0.11624800460083144, 0.13800483202213323, -0.11624800460083143, 0.06768047124839427, -0.02471421822271053, 0.0043368969523838044],
        [1.0, -7.066400935659158, 22.282841732134443, -40.899167759690194, 47.7488190443853, -36.28794166987363, 17.525308197085835, -4.916968808809249, 0.6136321446566275],
    ],
    [
        [0.004526024669335418, -0.024853341310296862, 0.06633306740470345, -0.11205225524131297, 0.1322732903672619, -0.11205225524131296, 0.06633306740470343, -0.02485334131029686, 0.004526024669335419],
        [1.0, -6.984278118272431, 21.827140360231382, -39.799167415497024, 46.25945822729413, -35.07310987894777, 16.93262860527145, -4.75855600922117, 0.5960751928987995],
    ],
    [
        [0.00474239625796174, -0.02499380596463687, 0.06487500279571448, -0.10760349060383693, 0.12624190293534066, -0.10760349060383693, 0.06487500279571448, -0.02499380596463687, 0.004742396257961739],
        [1.0, -6.894226798298632, 21.334486615873477, -38.62311409860344, 44.68114913604789, -33.794962002706086, 16.312989383468622, -4.594046616455515, 0.5780232045237449],
    ],
    [
        [0.004990191571060051, -0.025128181000361637, 0.06329538215743082, -0.10289719878775053, 0.11992071286215104, -0.10289719878775053, 0.06329538215743083, -0.025128181000361637, 0.004990191571060054],
        [1.0, -6.79544798002544, 20.802382146615194, -37.367856972183496, 43.01201083305064, -32.453063732098045, 15.666449159598839, -4.423501539854621, 0.559495322502032],
    ],
    [
        [0.005274352129526896, -0.02524594854371611, 0.0615834240431211, -0.09793085523637275, 0.11332718578707619, -0.09793085523637275, 0.0615834240431211, -0.02524594854371611, 0.005274352129526895],
        [1.0, -6.687064842185623, 20.228331361732867, -36.030696365815416, 41.25098990262018, -31.047652823844615, 14.993340857480824, -4.247033069556431, 0.5405149436939464],
    ],
    [
        [0.00560075066310104, -0.025332497641341274, 0.0597294342299738, -0.09270386940078082, 0.10648805831683447, -0.09270386940078082, 0.059729434229973816, -0.025332497641341274, 0.005600750663101041],
        [1.0, -6.568116533512586, 19.60989797510007, -34.6095566666191, 39.39807644361633, -29.57978088579429, 14.294320805657652, -4.064811676499422, 0.5211099709478462],
    ],
    [
        [0.00597640484980047, -0.02536779605802967, 0.05772639055929342, -0.08721707732274941, 0.09944172786344985, -0.08721707732274943, 0.05772639055929342, -0.025367796058029673, 0.00597640484980047],
        [1.0, -6.437551873102369, 18.944778839841206, -33.10319108341942, 37.45454812404108, -28.051468881642705, 13.570421890059988, -3.8770730815056953, 0.5013130400335111],
    ],
    [
        [0.006409748181780363, -0.025324631884673262, 0.05557244042345448, -0.08147143143878638, 0.0922414731373501, -0.08147143143878638, 0.05557244042345447, -0.025324631884673262, 0.006409748181780365],
        [1.0, -6.294223084694687, 18.23089886452634, -31.51142013399625, 35.4232406858656, -26.465874070897797, 12.823110089285402, -3.6841254672843737, 0.48116171376252653],
    ],
    [
        [0.006910975065516606, -0.025166277440949004, 0.05327474912598899, -0.0754653308163776, 0.08495999000129163, -0.0754653308163776, 0.05327474912598899, -0.025166277440949, 0.0069109750655166075],
        [1.0, -6.13687973964013, 17.46653141605767, -29.83540418550049, 33.308840938944385, -24.82746447194389, 12.054343348926588, -3.4863566630464184, 0.46069863537256106],
    ],
    [
        [0.007492482936933111, -0.024843373730448547, 0.05085533525956383, -0.06918971325084819, 0.07769604843957924, -0.06918971325084818, 0.05085533525956383, -0.024843373730448547, 0.007492482936933109],
        [1.0, -5.964163140699903, 16.650449261921576, -28.077947945362375, 31.118195126338986, -23.142194819024574, 11.26663128300421, -3.2842410786118443, 0.4399716333866005],
    ],
    [
        [0.008169441923752099, -0.02428975822533311, 0.04835981523837054, -0.06261953577840251, 0.0705845969396275, -0.06261953577840251, 0.048359815238370525, -0.02428975822533311, 0.008169441923752102],
        [1.0, -5.774601450549223, 15.782111752843857, -26.243831116583937, 28.860621473497485, -21.417675300765588, 10.46309363552916, -3.078346102042951, 0.41903377092862715],
    ],
    [
        [0.008960533255955208, -0.023416853204056634, 0.04587039265352516, -0.055699512786196656, 0.0638124746586671, -0.055699512786196656, 0.045870392653525154, -0.023416853204056627, 0.008960533255955208],
        [1.0, -5.566605958072902, 14.86189454518902, -24.3401540702307, 26.548210711950503, -19.66332105055428, 9.647514803217163, -2.8693375999734805, 0.3979433342233926],
    ],
    [
        [0.009888912417475096, -0.02210608355926968, 0.04352502661162495, -0.04832082694878446, 0.05764321394918235, -0.048320826948784465, 0.04352502661162493, -0.022106083559269685, 0.009888912417475094],
        [1.0, -5.338468986017549, 13.891368632101964, -22.376679823958636, 24.196092492234538, -17.89046635886877, 8.824391038286214, -2.657984069752425, 0.3767637582506955],
    ],
    [
        [0.010983473699441219, -0.02019858361191634, 0.041545580311015545, -0.040283777467981896, 0.05245649129241883, -0.040283777467981896, 0.04154558031101556, -0.020198583611916336, 0.010983473699441217],
        [1.0, -5.088364079790361, 12.873635676365122, -20.36614322410688, 21.822639212432378, -16.112422875375856, 7.998966272723143, -2.445158881802181, 0.35556349308429364],
    ],
    [
        [0.01228052192042468, -0.01748115540354857, 0.04027900876750388, -0.031238684874335194, 0.048811012893258746, -0.031238684874335204, 0.04027900876750388, -0.017481155403548568, 0.012280521920424677],
        [1.0, -4.814349284502579, 11.813726446573025, -18.3244843024015, 19.449572636840372, -14.344455681967876, 7.177251931125994, -2.2318399093381296, 0.33441582364828887],
    ],
    [
        [0.013825998405284624, -0.013667017350953969, 0.040257470741462575, -0.02059339167105141, 0.04754459893009222, -0.020593391671051398, 0.04025747074146257, -0.01366701735095396, 0.013825998405284617],
        [1.0, -4.51437452204554, 10.719068310870352, -16.270944571011164, 17.101934158082656, -12.603645096378239, 6.366025796658403, -2.019105652752717, 0.31339867066810306],
    ],
    [
        [0.015678467496227175, -0.00836927504508667, 0.04228590408282778, -0.007369735920904966, 0.04993284149245557, -0.007369735920904993, 0.042285904082827765, -0.00836927504508668, 0.015678467496227172],
        [1.0, -4.186294329446982, 9.600025904208621, -14.227941844479744, 14.807879041835662, -10.908595456709975, 5.572805243111057, -1.808126694318224, 0.2925944252118364],
    ],
    [
        [0.01791315537997775, -0.001064171312596881, 0.047569464189751484, 0.010017514905764906, 0.057939251278478945, 0.01001751490576491, 0.047569464189751484, -0.001064171312596877, 0.01791315537997775],
        [1.0, -3.8278875225540663, 8.470515797629128, -12.220610584118806, 12.598262300472927, -9.278944890087725, 4.805791403344478, -1.600150904289527, 0.27208990988921955],
    ],
    [
        [0.020627457718945367, 0.008960094134184316, 0.05789884240242036, 0.034098968412901005, 0.07460715471354855, 0.03409896841290097, 0.05789884240242036, 0.008960094134184304, 0.02062745771894537],
        [1.0, -3.4368857149913707, 7.348690645232522, -10.275860845493021, 10.506004805961943, -7.734621826402661, 4.0737838604485646, -1.396480149510101, 0.251976627976505],
    ],
    [
        [0.023948516210332706, 0.022675029544953637, 0.07591965285322626, 0.06886528972510973, 0.10466943795465031, 0.06886528972510973, 0.07591965285322626, 0.02267502954495363, 0.0239485162103327],
        [1.0, -3.011013062126157, 6.257680052410938, -8.420770819792597, 8.565271413592683, -6.294783699020355, 3.3860714603141346, -1.1984351229166776, 0.23235157819959315],
    ],
    [
        [0.028043737374400017, 0.041412753976796404, 0.10552395313721219, 0.12054586026952298, 0.15549031595470178, 0.12054586026952299, 0.10552395313721222, 0.04141275397679641, 0.028043737374400017],
        [1.0, -2.5480401246474127, 5.2263632450240225, -6.680088692109826, 6.810570145652341, -4.9763583012620245, 2.7523159197146096, -1.0073029333695345, 0.21331911580727392],
    ],
    [
        [0.033135537585417874, 0.06700886228056278, 0.1524191907920765, 0.19878030208294215, 0.2385087658576376, 0.19878030208294215, 0.1524191907920765, 0.06700886228056276, 0.03313553758541786],
        [1.0, -2.045855366555225, 4.290131197170646, -5.072585158203401, 5.276008559376331, -3.7920832221929017, 2.182464543437587, -0.8242585563944949, 0.19499470152744391],
    ],
    [
        [0.039522222709993025, 0.10200584414590787, 0.22495476250958324, 0.3183709829477198, 0.37143284481380817, 0.3183709829477198, 0.22495476250958324, 0.10200584414590787, 0.03952222270999303],
        [1.0, -1.5025585241163213, 3.4915715816216313, -3.6059793716109647, 3.9951392175099514, -2.747893183051242, 1.6867625816260547, -0.6502448096964044, 0.17751203602877824],
    ],
    [
        [0.04760787073927575, 0.14994435508494627, 0.3353221318552392, 0.5018882659317139, 0.5815461128809214, 0.501888265931714, 0.3353221318552392, 0.14994435508494627, 0.04760787073927576],
        [1.0, -0.9165809021422138, 2.880976878296504, -2.270176666144934, 3.0021101820906866, -1.8394199305787917, 1.2759950073124482, -0.4857836508669928, 0.16103629593350544],
    ],
    [
        [0.05794557923793645, 0.21578259032667504, 0.5012953107628808, 0.7835158399755944, 0.9106408246617468, 0.7835158399755944, 0.5012953107628809, 0.2157825903266751, 0.05794557923793648],
        [1.0, -0.2868385482439435, 2.516532232966685, -1.0286353039057428, 2.335221533573891, -1.0472121900123128, 0.962190081614974, -0.3306694591640334, 0.1457885007246042],
    ],
    [
        [0.07130078951598487, 0.3065032971291571, 0.7487496859043462, 1.2146779116283168, 1.4222944365617936, 1.2146779116283168, 0.7487496859043464, 0.3065032971291573, 0.07130078951598491],
        [1.0, 0.3870748340428416, 2.4639833981278385, 0.19213378083702715, 2.0444653292136574, -0.3300023372799449, 0.7601951211782234, -0.18345321177897173, 0.13209053182321845],
    ],
    [
        [0.08874513691791215, 0.43199657452047807, 1.1152940617550753, 1.8721852706745064, 2.2124541608375474, 1.8721852706745064, 1.1152940617550753, 0.4319965745204779, 0.08874513691791211],
        [1.0, 1.104647550725649, 2.7955151607504956, 1.5145705759540897, 2.2051295114614127, 0.385133166347157, 0.690844380219114, -0.04054686648858824, 0.1204492516068524],
    ],
    [
        [0.11179726881534366, 0.6063485808125183, 1.6554760914873201, 2.8698588740365394, 3.4245605723358326, 2.8698588740365403, 1.6554760914873201, 0.6063485808125183, 0.11179726881534371],
        [1.0, 1.864153854213876, 3.5874869798010005, 3.1225843049711166, 2.9398956086946333, 1.217642967108568, 0.7869756332262584, 0.10537603053219989, 0.11171633748456794],
    ],
    [
        [0.14263669817041835, 0.8497260591769279, 2.4481662626490697, 4.374779349355397, 5.270631895263458, 4.374779349355398, 2.44816626264907, 0.8497260591769281, 0.1426366981704184],
        [1.0, 2.662293228808068, 4.916575023150439, 5.272578780541213, 4.451650165679249, 2.356452004370495, 1.104472686165069, 0.26830524962877444, 0.10739833804305413],
    ],
    [
        [0.18443203079996623, 1.1911256035752633, 3.6068448976764214, 6.629297944115817, 8.059592294379618, 6.629297944115819, 3.6068448976764222, 1.1911256035752633, 0.18443203079996626],
        [1.0, 3.4937536767592343, 6.85375002819266, 8.299375346184029, 7.067641042723953, 4.095438445376882, 1.7420488081458456, 0.4743473167724935, 0.1102724671232553],
    ],
    [
        [0.2418479272313898, 1.6723389620321238, 5.2934528722977925, 9.9792650291326, 12.233009413637566, 9.979265029132602, 5.293452872297793, 1.6723389620321245, 0.2418479272313899],
        [1.0, 4.350674766483634, 9.455325605858532, 12.610909222516963, 11.291078395408299, 6.886872602045621, 2.8759030305898117, 0.7720420323077076, 0.12564098393371062],
    ],
    [
        [0.32182423518804526, 2.3534845483882827, 7.735714099898909, 14.906311417816514, 18.404598747911084, 14.906311417816514, 7.7357140998989085, 2.353484548388282, 0.321824235188045],
        [1.0, 5.221928073256036, 12.74980974562185, 18.661369355036726, 17.84585743908937, 11.416520471266004, 4.818630831325594, 1.2520324183888767, 0.16395279053778128],
    ],
    [
        [0.4347312260717141, 3.3200103231887415, 11.244750748053502, 22.05374450461666, 27.388554280994406, 22.053744504616663, 11.244750748053503, 3.3200103231887415, 0.4347312260717141],
        [1.0, 6.091898638702532, 16.717606253887094, 26.884237120713337, 27.677834584747167, 18.692599544233126, 8.113997699551359, 2.0844022727853533, 0.24641025938617928],
    ],
    [
        [0.5958643470885333, 4.688778799625196, 16.218834345323398, 32.21010215880489, 40.16836472840425, 32.210102158804894, 16.218834345323398, 4.688778799625196, 0.5958643470885332],
        [1.0, 6.937568779583116, 21.254715306785936, 37.54699295254092, 41.82804460710616, 30.098719294121416, 13.670705565221326, 3.5872422494390808, 0.41711989356719187],
    ],
    [
        [0.7042492743008238, 5.595847322158514, 19.490793593143987, 38.868532239932264, 48.53867339600887, 38.868532239932264, 19.49079359314398, 5.595847322158511, 0.7042492743008234],
        [1.0, 7.351487533237439, 23.7334715666807, 43.94729005942437, 51.052776432518094, 38.10320082840874, 17.84534704210253, 4.796139898128623, 0.5665254019807355],
    ],
    [
        [0.7042492743008238, 5.595847322158514, 19.490793593143987, 38.868532239932264, 48.53867339600887, 38.868532239932264, 19.49079359314398, 5.595847322158511, 0.7042492743008234],
        [1.0, 7.351487533237439, 23.7334715666807, 43.94729005942437, 51.052776432518094, 38.10320082840874, 17.84534704210253, 4.796139898128623, 0.5665254019807355],
    ],
    [
        [0.7042492743008238, 5.595847322158514, 19.490793593143987, 38.868532239932264, 48.53867339600887, 38.868532239932264, 19.49079359314398, 5.595847322158511, 0.7042492743008234],
        [1.0, 7.351487533237439, 23.7334715666807, 43.94729005942437, 51.052776432518094, 38.10320082840874, 17.84534704210253, 4.796139898128623, 0.5665254019807355],
    ],
    [
        [0.7042492743008238, 5.595847322158514, 19.490793593143987, 38.868532239932264, 48.53867339600887, 38.868532239932264, 19.49079359314398, 5.595847322158511, 0.7042492743008234],
        [1.0, 7.351487533237439, 23.7334715666807, 43.94729005942437, 51.052776432518094, 38.10320082840874, 17.84534704210253, 4.796139898128623, 0.5665254019807355],
    ],
    [
        [0.7042492743008238, 5.595847322158514, 19.490793593143987, 38.868532239932264, 48.53867339600887, 38.868532239932264, 19.49079359314398, 5.595847322158511, 0.7042492743008234],
        [1.0, 7.351487533237439, 23.7334715666807, 43.94729005942437, 51.052776432518094, 38.10320082840874, 17.84534704210253, 4.796139898128623, 0.5665254019807355],
    ],
    [
        [0.7042492743008238, 5.595847322158514, 19.490793593143987, 38.868532239932264, 48.53867339600887, 38.868532239932264, 19.49079359314398, 5.595847322158511, 0.7042492743008234],
        [1.0, 7.351487533237439, 23.7334715666807, 43.94729005942437, 51.052776432518094, 38.10320082840874, 17.84534704210253, 4.796139898128623, 0.5665254019807355],
    ],
    [
        [0.7042492743008238, 5.595847322158514, 19.490793593143987, 38.868532239932264, 48.53867339600887, 38.868532239932264, 19.49079359314398, 5.595847322158511, 0.7042492743008234],
        [1.0, 7.351487533237439, 23.7334715666807, 43.94729005942437, 51.052776432518094, 38.10320082840874, 17.84534704210253, 4.796139898128623, 0.5665254019807355],
    ],
    [
        [0.7042492743008238, 5.595847322158514, 19.490793593143987, 38.868532239932264, 48.53867339600887, 38.868532239932264, 19.49079359314398, 5.595847322158511, 0.7042492743008234],
        [1.0, 7.351487533237439, 23.7334715666807, 43.94729005942437, 51.052776432518094, 38.10320082840874, 17.84534704210253, 4.796139898128623, 0.5665254019807355],
    ],
    [
        [0.7042492743008238, 5.595847322158514, 19.490793593143987, 38.868532239932264, 48.53867339600887, 38.868532239932264, 19.49079359314398, 5.595847322158511, 0.7042492743008234],
        [1.0, 7.351487533237439, 23.7334715666807, 43.94729005942437, 51.052776432518094, 38.10320082840874, 17.84534704210253, 4.796139898128623, 0.5665254019807355],
    ],
    [
        [0.7042492743008238, 5.595847322158514, 19.490793593143987, 38.868532239932264, 48.53867339600887, 38.868532239932264, 19.49079359314398, 5.595847322158511, 0.7042492743008234],
        [1.0, 7.351487533237439, 23.7334715666807, 43.94729005942437, 51.052776432518094, 38.10320082840874, 17.84534704210253, 4.796139898128623, 0.5665254019807355],
    ],
    [
        [0.7042492743008238, 5.595847322158514, 19.490793593143987, 38.868532239932264, 48.53867339600887, 38.868532239932264, 19.49079359314398, 5.595847322158511, 0.7042492743008234],
        [1.0, 7.351487533237439, 23.7334715666807, 43.94729005942437, 51.052776432518094, 38.10320082840874, 17.84534704210253, 4.796139898128623, 0.5665254019807355],
    ],
    [
        [0.7042492743008238, 5.595847322158514, 19.490793593143987, 38.868532239932264, 48.53867339600887, 38.868532239932264, 19.49079359314398, 5.595847322158511, 0.7042492743008234],
        [1.0, 7.351487533237439, 23.7334715666807, 43.94729005942437, 51.052776432518094, 38.10320082840874, 17.84534704210253, 4.796139898128623, 0.5665254019807355],
    ],
    [
        [0.7042492743008238, 5.595847322158514, 19.490793593143987, 38.868532239932264, 48.53867339600887, 38.868532239932264, 19.49079359314398, 5.595847322158511, 0.7042492743008234],
        [1.0, 7.351487533237439, 23.7334715666807, 43.94729005942437, 51.052776432518094, 38.10320082840874, 17.84534704210253, 4.796139898128623, 0.5665254019807355],
    ],
    [
        [0.7042492743008238, 5.595847322158514, 19.490793593143987, 38.868532239932264, 48.53867339600887, 38.868532239932264, 19.49079359314398, 5.595847322158511, 0.7042492743008234],
        [1.0, 7.351487533237439, 23.7334715666807, 43.94729005942437, 51.052776432518094, 38.10320082840874, 17.84534704210253, 4.796139898128623, 0.5665254019807355],
    ],
    [
        [0.7042492743008238, 5.595847322158514, 19.490793593143987, 38.868532239932264, 48.53867339600887, 38.868532239932264, 19.49079359314398, 5.595847322158511, 0.7042492743008234],
        [1.0, 7.351487533237439, 23.7334715666807, 43.94729005942437, 51.052776432518094, 38.10320082840874, 17.84534704210253, 4.796139898128623, 0.5665254019807355],
    ],
    [
        [0.7042492743008238, 5.595847322158514, 19.490793593143987, 38.868532239932264, 48.53867339600887, 38.868532239932264, 19.49079359314398, 5.595847322158511, 0.7042492743008234],
        [1.0, 7.351487533237439, 23.7334715666807, 43.94729005942437, 51.052776432518094, 38.10320082840874, 17.84534704210253, 4.796139898128623, 0.5665254019807355],
    ],
    [
        [0.7042492743008238, 5.595847322158514, 19.490793593143987, 38.868532239932264, 48.53867339600887, 38.868532239932264, 19.49079359314398, 5.595847322158511, 0.7042492743008234],
        [1.0, 7.351487533237439, 23.7334715666807, 43.94729005942437, 51.052776432518094, 38.10320082840874, 17.84534704210253, 4.796139898128623, 0.5665254019807355],
    ],
    [
        [0.7042492743008238, 5.595847322158514, 19.490793593143987, 38.868532239932264, 48.53867339600887, 38.868532239932264, 19.49079359314398, 5.595847322158511, 0.7042492743008234],
        [1.0, 7.351487533237439, 23.7334715666807, 43.94729005942437, 51.052776432518094, 38.10320082840874, 17.84534704210253, 4.796139898128623, 0.5665254019807355],
    ],
    [
        [0.7042492743008238, 5.595847322158514, 19.490793593143987, 38.868532239932264, 48.53867339600887, 38.868532239932264, 19.49079359314398, 5.595847322158511, 0.7042492743008234],
        [1.0, 7.351487533237439, 23.7334715666807, 43.94729005942437, 51.052776432518094, 38.10320082840874, 17.84534704210253, 4.796139898128623, 0.5665254019807355],
    ],
    [
        [0.7042492743008238, 5.595847322158514, 19.490793593143987, 38.868532239932264, 48.53867339600887, 38.868532239932264, 19.49079359314398, 5.595847322158511, 0.7042492743008234],
        [1.0, 7.351487533237439, 23.7334715666807, 43.94729005942437, 51.052776432518094, 38.10320082840874, 17.84534704210253, 4.796139898128623, 0.5665254019807355],
    ],
    [
        [0.7042492743008238, 5.595847322158514, 19.490793593143987, 38.868532239932264, 48.53867339600887, 38.868532239932264, 19.49079359314398, 5.595847322158511, 0.7042492743008234],
        [1.0, 7.351487533237439, 23.7334715666807, 43.94729005942437, 51.052776432518094, 38.10320082840874, 17.84534704210253, 4.796139898128623, 0.5665254019807355],
    ],
    [
        [0.7042492743008238, 5.595847322158514, 19.490793593143987, 38.868532239932264, 48.53867339600887, 38.868532239932264, 19.49079359314398, 5.595847322158511, 0.7042492743008234],
        [1.0, 7.351487533237439, 23.7334715666807, 43.94729005942437, 51.052776432518094, 38.10320082840874, 17.84534704210253, 4.796139898128623, 0.5665254019807355],
    ],
    [
        [0.7042492743008238, 5.595847322158514, 19.490793593143987, 38.868532239932264, 48.53867339600887, 38.868532239932264, 19.49079359314398, 5.595847322158511, 0.7042492743008234],
        [1.0, 7.351487533237439, 23.7334715666807, 43.94729005942437, 51.052776432518094, 38.10320082840874, 17.84534704210253, 4.796139898128623, 0.5665254019807355],
    ],
    [
        [0.7042492743008238, 5.595847322158514, 19.490793593143987, 38.868532239932264, 48.53867339600887, 38.868532239932264, 19.49079359314398, 5.595847322158511, 0.7042492743008234],
        [1.0, 7.351487533237439, 23.7334715666807, 43.94729005942437, 51.052776432518094, 38.10320082840874, 17.84534704210253, 4.796139898128623, 0.5665254019807355],
    ],
    [
        [0.7042492743008238, 5.595847322158514, 19.490793593143987, 38.868532239932264, 48.53867339600887, 38.868532239932264, 19.49079359314398, 5.595847322158511, 0.7042492743008234],
        [1.0, 7.351487533237439, 23.7334715666807, 43.94729005942437, 51.052776432518094, 38.10320082840874, 17.84534704210253, 4.796139898128623, 0.5665254019807355],
    ],
    [
        [0.7042492743008238, 5.595847322158514, 19.490793593143987, 38.868532239932264, 48.53867339600887, 38.868532239932264, 19.49079359314398, 5.595847322158511, 0.7042492743008234],
        [1.0, 7.351487533237439, 23.7334715666807, 43.94729005942437, 51.052776432518094, 38.10320082840874, 17.84534704210253, 4.796139898128623, 0.5665254019807355],
    ],
    [
        [0.7042492743008238, 5.595847322158514, 19.490793593143987, 38.868532239932264, 48.53867339600887, 38.868532239932264, 19.49079359314398, 5.595847322158511, 0.7042492743008234],
        [1.0, 7.351487533237439, 23.7334715666807, 43.94729005942437, 51.052776432518094, 38.10320082840874, 17.84534704210253, 4.796139898128623, 0.5665254019807355],
    ],
    [
        [0.7042492743008238, 5.595847322158514, 19.490793593143987, 38.868532239932264, 48.53867339600887, 38.868532239932264, 19.49079359314398, 5.595847322158511, 0.7042492743008234],
        [1.0, 7.351487533237439, 23.7334715666807, 43.94729005942437, 51.052776432518094, 38.10320082840874, 17.84534704210253, 4.796139898128623, 0.5665254019807355],
    ],
    [
        [0.7042492743008238, 5.595847322158514, 19.490793593143987, 38.868532239932264, 48.53867339600887, 38.868532239932264, 19.49079359314398, 5.595847322158511, 0.7042492743008234],
        [1.0, 7.351487533237439, 23.7334715666807, 43.94729005942437, 51.052776432518094, 38.10320082840874, 17.84534704210253, 4.796139898128623, 0.5665254019807355],
    ],
    [
        [0.7042492743008238, 5.595847322158514, 19.490793593143987, 38.868532239932264, 48.53867339600887, 38.868532239932264, 19.49079359314398, 5.595847322158511, 0.7042492743008234],
        [1.0, 7.351487533237439, 23.7334715666807, 43.94729005942437, 51.052776432518094, 38.10320082840874, 17.84534704210253, 4.796139898128623, 0.5665254019807355],
    ],
    [
        [0.7042492743008238, 5.595847322158514, 19.490793593143987, 38.868532239932264, 48.53867339600887, 38.868532239932264, 19.49079359314398, 5.595847322158511, 0.7042492743008234],
        [1.0, 7.351487533237439, 23.7334715666807, 43.94729005942437, 51.052776432518094, 38.10320082840874, 17.84534704210253, 4.796139898128623, 0.5665254019807355],
    ],
    [
        [0.7042492743008238, 5.595847322158514, 19.490793593143987, 38.868532239932264, 48.53867339600887, 38.868532239932264, 19.49079359314398, 5.595847322158511, 0.7042492743008234],
        [1.0, 7.351487533237439, 23.7334715666807, 43.94729005942437, 51.052776432518094, 38.10320082840874, 17.84534704210253, 4.796139898128623, 0.5665254019807355],
    ],
];

/// 8th-order elliptic lowpass sections for a 2756.25 Hz stream,
/// one per MIDI pitch.
pub(crate) static MIDI_ELLIPTIC_2756_25: MidiTable = [
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.0030954350286727774, -0.0245572569262773, 0.08543785591547058, -0.17026305569331496, 0.21257404337979194, -0.17026305569331493, 0.08543785591547057, -0.024557256926277287, 0.0030954350286727765],
        [1.0, -7.9189203587591805, 27.44543770597468, -54.374548750882695, 67.35344609834252, -53.414836277675434, 26.485081781771868, -7.506879092110606, 0.9312188933694552],
    ],
    [
        [0.003094862563763469, -0.024541547772543113, 0.08535538621680425, -0.17006539707486645, 0.2123133921693989, -0.17006539707486648, 0.08535538621680426, -0.024541547772543113, 0.003094862563763469],
        [1.0, -7.916463294351019, 27.428966150503147, -54.327253052728665, 67.27805000494754, -53.342774716272416, 26.443791670832784, -7.493747789269431, 0.9294310263758947],
    ],
    [
        [0.0030937977978379404, -0.024506769356689318, 0.0851688743752498, -0.16961531143807881, 0.2117188172999331, -0.16961531143807876, 0.08516887437524978, -0.024506769356689308, 0.0030937977978379386],
        [1.0, -7.910847328485176, 27.391379671132015, -54.219508871332366, 67.10658380518024, -53.17918010088823, 26.35022515872652, -7.464047602809988, 0.9253952685369297],
    ],
    [
        [0.003093018757284575, -0.02447111565263513, 0.08497161828499264, -0.1691346948186758, 0.21108234694766576, -0.16913469481867577, 0.08497161828499263, -0.02447111565263513, 0.0030930187572845744],
        [1.0, -7.904818479849409, 27.35112304198617, -54.10438226037044, 66.92381114673229, -53.00523155708837, 26.250993043835503, -7.432633589300558, 0.9211386541497257],
    ],
    [
        [0.0030925832610728837, -0.024434669233297204, 0.08476301395365603, -0.16862131188675653, 0.210400767952535, -0.1686213118867565, 0.08476301395365603, -0.024434669233297204, 0.0030925832610728845],
        [1.0, -7.898342625913733, 27.30798607895084, -53.98132217974472, 66.72893646326975, -52.82024772657863, 26.1457504442624, -7.399410747717047, 0.9166502936214336],
    ],
    [
        [0.0030925572683507875, -0.024397531797577938, 0.08454242391576917, -0.1680727509935054, 0.20967060343858052, -0.16807275099350544, 0.08454242391576922, -0.02439753179757794, 0.0030925572683507875],
        [1.0, -7.891382461946666, 27.261740179530243, -53.84973255826303, 66.52110424471638, -52.62350076174988, 26.03413181425892, -7.36427936275904, 0.9119189064510397],
    ],
    [
        [0.0030930158979586794, -0.024359826592931927, 0.08430917509920201, -0.16748640992718358, 0.208888091401561, -0.16748640992718358, 0.08430917509920202, -0.02435982659293193, 0.0030930158979586807],
        [1.0, -7.883897174360738, 27.212136578688778, -53.708968403187484, 66.29939439972046, -52.41421321768197, 25.91574984486287, -7.327134853793456, 0.9069328261282696],
    ],
    [
        [0.0030940445704372575, -0.02432170104659124, 0.08406255644227179, -0.16685948066452289, 0.20804916195975554, -0.16685948066452289, 0.08406255644227179, -0.024321701046591242, 0.003094044570437259],
        [1.0, -7.875842078573238, 27.158904437156934, -53.55833158777642, 66.06281730264473, -52.19155478931066, 25.790194341220857, -7.28786763295032, 0.9016800081844225],
    ],
    [
        [0.00309574028764002, -0.024283329606530762, 0.0838018162075974, -0.16618893309756252, 0.20714941330862438, -0.16618893309756252, 0.08380181620759738, -0.02428332960653076, 0.003095740287640019],
        [1.0, -7.867168217464156, 27.101748747696963, -53.39706629822416, 65.81030851911493, -51.95463890137765, 25.65703108481782, -7.246362975450869, 0.8961480418308309],
    ],
    [
        [0.0030982130671922403, -0.024244916787847213, 0.08352615892556299, -0.16547149773114866, 0.20618408646218137, -0.16547149773114864, 0.08352615892556298, -0.02424491678784721, 0.0030982130671922395],
        [1.0, -7.85782191609236, 27.04034804409924, -53.224354122717855, 65.54072320872986, -51.70251916362083, 25.515800691207794, -7.202500905772415, 0.890324165659801],
    ],
    [
        [0.00310158755155189, -0.02420670041293115, 0.08323474188403522, -0.16470364736662949, 0.20514803891811062, -0.1647036473666295, 0.08323474188403523, -0.02420670041293115, 0.0031015875515518895],
        [1.0, -7.847744287869239, 26.97435189708037, -53.039308767493324, 65.25283020959942, -51.434185709712324, 25.366017476685396, -7.156156103851339, 0.8841952879233476],
    ],
    [
        [0.0031060048144102275, -0.024168955024115483, 0.08292667106115933, -0.1638815778139369, 0.2040357174524115, -0.1638815778139369, 0.08292667106115933, -0.02416895502411548, 0.003106004814410227],
        [1.0, -7.836870686883497, 26.903378180836505, -52.84097038801592, 64.94530581727399, -51.14856144594746, 25.207168350728377, -7.10719783620174, 0.8777480119461977],
    ],
    [
        [0.0031116243907290627, -0.024131995434747297, 0.08260099637398417, -0.16300118770875346, 0.20284113033575754, -0.1630011877087535, 0.08260099637398417, -0.024131995434747297, 0.0031116243907290636],
        [1.0, -7.825130100518919, 26.82701009384907, -52.62829952803061, 64.61672728077528, -50.84449824491409, 25.03871175506852, -7.055489917591537, 0.8709686672709973],
    ],
    [
        [0.00311862656098334, -0.02409618036804176, 0.08225670608659787, -0.16205805755560632, 0.20155781937132095, -0.1620580575556063, 0.08225670608659783, -0.024096180368041748, 0.003118626560983338],
        [1.0, -7.812444475906389, 26.744792917742004, -52.40017066557027, 64.26556605132083, -50.52077313064782, 24.860076675006667, -7.000890709777808, 0.8638433471745385],
    ],
    [
        [0.0031272149253322996, -0.02406191611162233, 0.08189272018661875, -0.1610474281736525, 0.20017883228663474, -0.16104742817365247, 0.08189272018661872, -0.024061916111622325, 0.0031272149253322988],
        [1.0, -7.798727973099938, 26.656230498673537, -52.155365373511536, 63.890180835524305, -50.176084515473335, 24.670661754185986, -6.943253164766274, 0.8563579532332362],
    ],
    [
        [0.0031376193096942485, -0.024029660088044302, 0.08150788249748558, -0.15996417879216795, 0.19869669617473826, -0.1599641787921679, 0.08150788249748557, -0.024029660088044292, 0.0031376193096942476],
        [1.0, -7.78388613716321, 26.56078143706939, -51.8925651134487, 63.48881052503626, -49.80904856527404, 24.46983455059585, -6.882424921134568, 0.8484982476529699],
    ],
    [
        [0.0031500990533191156, -0.023999924206218687, 0.08110095124530865, -0.15880280513034797, 0.19710339287756878, -0.15880280513034797, 0.08110095124530865, -0.023999924206218683, 0.0031500990533191147],
        [1.0, -7.767814980596656, 26.457854973662048, -51.610343696137775, 63.05956709954218, -49.418195789788584, 24.256930979221394, -6.81824846315003, 0.8402499141112366],
    ],
    [
        [0.003164946736779404, -0.023973277813437444, 0.08067058774250836, -0.15755739790446605, 0.1953903374429516, -0.15755739790446602, 0.08067058774250835, -0.02397327781343744, 0.0031649467367794028],
        [1.0, -7.750399966727792, 26.346806563038584, -51.307159460302, 62.60042863067717, -49.00196797824361, 24.031254995619907, -6.750561353726452, 0.8315986278868355],
    ],
    [
        [0.00318249242076368, -0.023950350010032578, 0.08021534278588402, -0.15622162233880535, 0.1935483610716989, -0.15622162233880532, 0.08021534278588399, -0.023950350010032574, 0.0031824924207636785],
        [1.0, -7.731514883829902, 26.22693313052038, -50.98134724507498, 62.10923255178804, -48.55871562877539, 23.792078584931488, -6.679196553701798, 0.8225301360719588],
    ],
    [
        [0.0032031084801995274, -0.023931831015232694, 0.0797336402945247, -0.15478869941966833, 0.1915677003095212, -0.15478869941966833, 0.0797336402945247, -0.02393183101523269, 0.0032031084801995274],
        [1.0, -7.711020598832607, 26.097468014579057, -50.63111026084728, 61.583669403757455, -48.086696053302994, 23.53864213256131, -6.603982841480015, 0.813030348671359],
    ],
    [
        [0.0032272151357414813, -0.02391847217922239, 0.07922375763453211, -0.1532513898292806, 0.1894379946359222, -0.1532513898292806, 0.07922375763453211, -0.023918472179222397, 0.0032272151357414826],
        [1.0, -7.688763678549323, 25.95757560559766, -50.25451200001562, 61.02127732162428, -47.584072378457165, 23.27015526613637, -6.5247453487590175, 0.8030854413905256],
    ],
    [
        [0.003255286806402998, -0.023911084117238402, 0.07868380199593791, -0.1516019817339658, 0.18714829506478048, -0.15160198173396583, 0.07868380199593793, -0.023911084117238406, 0.0032552868064029987],
        [1.0, -7.664574865382608, 25.806345703185784, -49.84946837455229, 60.41943759193387, -47.048913708518455, 22.9857982734595, -6.44130622985162, 0.7926819708964498],
    ],
    [
        [0.0032878594341941153, -0.02391053228961127, 0.07811168210805303, -0.1498322838840067, 0.18468708690373362, -0.1498322838840067, 0.078111682108053, -0.023910532289611267, 0.0032878594341941153],
        [1.0, -7.638267393495845, 25.642787629150902, -49.413740323079956, 59.77537168819519, -46.47919676874196, 22.684724218150638, -6.353485483977968, 0.7818070032972161],
    ],
    [
        [0.0033255389654507023, -0.023917729157695525, 0.07750507451216335, -0.14793362581588657, 0.18204233042489776, -0.14793362581588657, 0.07750507451216335, -0.023917729157695515, 0.003325538965450701],
        [1.0, -7.609635130481154, 25.465824152467157, -48.94492719813779, 59.086140283117174, -45.872809407529374, 22.36606189351989, -6.261101951835702, 0.7704482565263151],
    ],
    [
        [0.0033690112158971776, -0.023933621797511122, 0.07686138357008826, -0.14589686733423152, 0.17920152387864305, -0.14589686733423152, 0.07686138357008823, -0.023933621797511115, 0.0033690112158971768],
        [1.0, -7.5784505286401345, 25.27428530720375, -48.440461326674, 58.34864484305716, -45.22755640411934, 22.02891977594026, -6.163974509695817, 0.7585942572300572],
    ],
    [
        [0.0034190533996584093, -0.023959173534735784, 0.07617769439709123, -0.14371241989021788, 0.1761517940325942, -0.14371241989021785, 0.07617769439709121, -0.023959173534735777, 0.003419053399658409],
        [1.0, -7.5444623691671096, 25.06690221562993, -47.89760423581008, 57.55963253382062, -44.54116810502432, 21.672391161456023, -6.0619234861685936, 0.7462345126370327],
    ],
    [
        [0.003476547669360566, -0.0239953377554714, 0.07545071800371454, -0.14137028295839038, 0.17288002023355004, -0.14137028295839035, 0.07545071800371451, -0.023995337755471385, 0.0034765476693605643],
        [1.0, -7.507393281838263, 24.842301068109823, -47.31344515405566, 56.71570530879385, -43.811312497215276, 21.295560693320148, -5.954772328556008, 0.7333596977321966],
    ],
    [
        [0.0035424970989075782, -0.0240430215191671, 0.07467672816684891, -0.13886009902617294, 0.16937299886086948, -0.13886009902617294, 0.07467672816684894, -0.024043021519167096, 0.003542497098907579],
        [1.0, -7.46693702233463, 24.59899746074319, -46.6849025379299, 55.81333421103339, -43.03561141836872, 20.89751251316222, -5.8423495472521765, 0.7199618578596002],
    ],
    [
        [0.0036180446473613203, -0.024103035916204444, 0.07385149000504425, -0.1361712313119152, 0.16561765595445052, -0.13617123131191522, 0.07385149000504425, -0.02410303591620445, 0.0036180446473613203],
        [1.0, -7.422755489153113, 24.335391353145877, -46.00872953777965, 54.84888010016884, -42.21166170290168, 20.477340293866447, -5.724490967839785, 0.7060346266316733],
    ],
    [
        [0.0037044957779088054, -0.02417602922342101, 0.07297018102313461, -0.1332928687484785, 0.16160131675003286, -0.13329286874847854, 0.07297018102313464, -0.02417602922342102, 0.003704495777908808],
        [1.0, -7.374475462303056, 24.049762984834768, -45.28152450653979, 53.81862221126294, -41.33706216451481, 20.034159436993384, -5.601042321192412, 0.6915734587239474],
    ],
    [
        [0.003803345578401083, -0.02426239774970319, 0.07202730668640067, -0.130214162989278, 0.15731204184350728, -0.130214162989278, 0.07202730668640067, -0.02426239774970319, 0.0038033455784010827],
        [1.0, -7.321685046793338, 23.740270182361378, -44.49974787259481, 52.71879616262778, -40.409447417573396, 19.5671217403153, -5.4718622018246, 0.6765758767772188],
    ],
    [
        [0.003916311450175029, -0.02436216774084731, 0.07101661463090722, -0.12692440200994706, 0.1527390407714409, -0.12692440200994706, 0.07101661463090721, -0.024362167740847308, 0.003916311450175028],
        [1.0, -7.2639298054721415, 23.4049476040813, -43.659746942842034, 51.54564324676603, -39.42652963497963, 19.075432859860893, -5.336825423683386, 0.6610417312101036],
    ],
    [
        [0.004045372714007112, -0.02447483970629536, 0.06993101477005574, -0.12341322396008846, 0.14787317504314582, -0.12341322396008846, 0.06993101477005574, -0.024474839706295364, 0.004045372714007113],
        [1.0, -7.200708568321025, 23.041708609212943, -42.75779047253805, 50.29547305301642, -38.38614942079912, 18.558372903270296, -5.195826800244248, 0.644973471260584],
    ],
    [
        [0.004192818844869577, -0.024599183874128922, 0.0687625173304215, -0.11967087273269492, 0.14270756432823073, -0.11967087273269492, 0.0687625173304215, -0.024599183874128922, 0.004192818844869577],
        [1.0, -7.13146890911842, 22.648350607106035, -41.790115129396625, 48.964741666896614, -37.28633703013001, 18.01532049399321, -5.0487853718033815, 0.6283764250240628],
    ],
    [
        [0.004361308515649445, -0.02473297194791745, 0.06750220798008173, -0.11568849241595228, 0.1372383120692596, -0.11568849241595229, 0.06750220798008173, -0.02473297194791745, 0.0043613085156494445],
        [1.0, -7.055602285837572, 22.222564946368927, -40.75298628089075, 47.550147847515156, -36.125385180802546, 17.445780634791834, -4.895649096827127, 0.6112590856388208],
    ],
    [
        [0.004553942237596307, -0.024872625618104646, 0.06614028975968371, -0.11145845003783365, 0.13146537114446696, -0.11145845003783364, 0.0661402897596837, -0.02487262561810464, 0.0045539422375963055],
        [1.0, -6.9724388486802695, 21.76195264705139, -39.64277582925634, 46.04874966994444, -34.90193465069352, 16.849416668994927, -4.73640001564493, 0.593633400092261],
    ],
    [
        [0.004774352177036799, -0.025012755942172914, 0.06466623701294598, -0.10697466272037351, 0.1253935779480827, -0.10697466272037351, 0.06466623701294598, -0.025012755942172917, 0.004774352177036799],
        [1.0, -6.881241929826782, 21.264047568029238, -38.45606008225373, 44.45810409225115, -33.61507371389484, 16.226086582728886, -4.571059883105437, 0.575515056392652],
    ],
    [
        [0.005026813764885036, -0.025145559157670812, 0.06306912912666425, -0.10223288328364628, 0.11903389715261614, -0.10223288328364628, 0.06306912912666425, -0.025145559157670812, 0.005026813764885036],
        [1.0, -6.781202242488668, 20.726348941580518, -37.18974084009182, 42.77643171160547, -32.26445220470677, 15.575883803464404, -4.399696251440988, 0.5569237640873197],
    ],
    [
        [0.005316385080954152, -0.025260022904921905, 0.06133826477571707, -0.0972308624646319, 0.1124049441414676, -0.09723086246463189, 0.06133826477571707, -0.025260022904921905, 0.005316385080954152],
        [1.0, -6.67143183452569, 20.146365602803375, -35.84119294289222, 41.00280853930343, -30.850410568346156, 14.899182521027189, -4.222428964828426, 0.5378835223349034],
    ],
    [
        [0.005649081803319406, -0.025340881060667363, 0.05946420505243113, -0.09196824852707382, 0.105534895387116, -0.0919682485270738, 0.05946420505243113, -0.02534088106066735, 0.005649081803319405],
        [1.0, -6.550957864759331, 19.521674696580607, -34.40844137743151, 39.13738586159706, -29.374123610401462, 14.196687377048232, -4.039437002257644, 0.5184228689937873],
    ],
    [
        [0.00603209792188605, -0.02536723380794972, 0.057440462864819436, -0.08644599431067883, 0.0984639714969061, -0.08644599431067881, 0.057440462864819415, -0.025367233807949727, 0.006032097921886048],
        [1.0, -6.418716299437366, 18.849998160357522, -32.890370573681, 37.181638054486115, -27.837757733341427, 13.469487127328039, -3.850965574531516, 0.49857510352568163],
    ],
    [
        [0.006474085644450311, -0.025310719924294844, 0.055266155728777966, -0.08066489965090624, 0.09124780348663568, -0.08066489965090624, 0.05526615572877795, -0.02531071992429484, 0.00647408564445031],
        [1.0, -6.273545663602149, 18.12930085406087, -31.2869675767803, 35.13863646211401, -26.24463917912155, 12.719111568452366, -3.6573333436667537, 0.4783784760108312],
    ],
    [
        [0.006985512280348402, -0.025133087358227692, 0.052950083164887383, -0.07462269613959141, 0.08396220217927128, -0.07462269613959142, 0.052950083164887383, -0.025133087358227703, 0.006985512280348402],
        [1.0, -6.114181029236459, 17.357914829568273, -29.599599152190997, 33.01334499607583, -24.599429106652913, 11.947590626160277, -3.458939587697135, 0.45787633434168734],
    ],
    [
        [0.00757911780472208, -0.024782951442013777, 0.05051689804967341, -0.06830873978364209, 0.07671019388349279, -0.06830873978364209, 0.05051689804967341, -0.02478295144201377, 0.007579117804722077],
        [1.0, -5.9392484812379305, 16.534694881993456, -27.83132029967993, 30.81292983670049, -22.908299142821164, 11.157514022590975, -3.2562710797877195, 0.4371172218677802],
    ],
    [
        [0.008270504900994137, -0.024191451084701325, 0.048016342054057734, -0.06169485242232525, 0.06963274111733421, -0.061694852422325246, 0.04801634205405772, -0.024191451084701318, 0.008270504900994133],
        [1.0, -5.747260376193084, 15.65921117009594, -25.987207766087614, 28.547071417299712, -21.179098279455253, 10.352089373098462, -3.049908386212395, 0.41615491864527415],
    ],
    [
        [0.009078904430820055, -0.023266402738262845, 0.045536950269689624, -0.05472005025172613, 0.0629254560488116, -0.05472005025172612, 0.04553695026968962, -0.02326640273826283, 0.009078904430820052],
        [1.0, -5.536611800811432, 14.731985279196826, -24.07470651755242, 26.228261723781806, -19.421498580199426, 9.53519592238651, -2.840531211028877, 0.39504842135969],
    ],
    [
        [0.010028174758752294, -0.02188439649974867, 0.043226259725581105, -0.04726567580274949, 0.056865021482912344, -0.047265675802749464, 0.0432262597255811, -0.021884396499748653, 0.010028174758752288],
        [1.0, -5.305578750597338, 13.754776543941135, -22.10396921993906, 23.87206396864446, -17.647103065285382, 8.711430444235454, -2.6289223228002134, 0.37386186049308207],
    ],
    [
        [0.011148115007245671, -0.019880059127947484, 0.04132046880281075, -0.03911559677749232, 0.051851240212924865, -0.03911559677749232, 0.041320468802810734, -0.01988005912794748, 0.011148115007245671],
        [1.0, -5.052318689481604, 12.730925626774487, -20.088157944384275, 21.497305286597246, -15.869494344369933, 7.886141158609398, -2.4159694845299526, 0.3526643592721647],
    ],
    [
        [0.012476202838282326, -0.017031397000614297, 0.04018781799074283, -0.02989333712030856, 0.04847406060242253, -0.02989333712030856, 0.04018781799074284, -0.017031397000614297, 0.012476202838282326],
        [1.0, -4.774874323163803, 11.665762082908158, -18.043662846524892, 19.12616707003214, -14.104197090650384, 7.065444970926474, -2.2026646613898047, 0.33152984878053343],
    ],
    [
        [0.014059910743774627, -0.013039687196707344, 0.04039188435404654, -0.01896379826166927, 0.047620204467880976, -0.01896379826166926, 0.040391884354046524, -0.013039687196707344, 0.01405991074377462],
        [1.0, -4.471181629271509, 10.56708168178357, -15.990173718342046, 16.78413342256188, -12.368521345529599, 6.256223091483924, -1.9900995821976644, 0.3105368697067782],
    ],
    [
        [0.015959817032927356, -0.0075017468727513305, 0.04278377578970175, -0.005280929446332921, 0.05064208454323311, -0.005280929446332893, 0.042783775789701765, -0.0075017468727513244, 0.015959817032927356],
        [1.0, -4.139083443669142, 9.445697248635692, -13.950516413139031, 14.499758501236741, -10.681246953462253, 5.466090447433287, -1.7794564438454552, 0.2897684175512042],
    ],
    [
        [0.018253817696513398, 0.00012850875846843045, 0.0486362749073905, 0.012846679603654869, 0.05962390721107917, 0.012846679603654864, 0.04863627490739051, 0.00012850875846843248, 0.018253817696513398],
        [1.0, -3.7763502130818662, 8.316063260022586, -11.950136800001868, 12.304222296517906, -9.062102075062512, 4.703335744996675, -1.5719921065413094, 0.26931193172454115],
    ],
    [
        [0.021042876738698778, 0.01059364275333596, 0.05983889533956738, 0.0381142211702392, 0.07779818503823577, 0.0381142211702392, 0.05983889533956737, 0.010593642753335962, 0.021042876738698774],
        [1.0, -3.3807098995586142, 7.1969687332709364, -10.016080318486079, 10.230667827569395, -7.530980287384556, 3.9768323785244535, -1.3690134095359912, 0.2492596022728786],
    ],
    [
        [0.02445894634313695, 0.024907772488285882, 0.07918141471516289, 0.0747655358466303, 0.11019314492376578, 0.07476553584663032, 0.07918141471516288, 0.02490777248828587, 0.02445894634313694],
        [1.0, -2.9498894730682403, 6.11228424757082, -8.175276722444021, 8.31335977440911, -6.106830022820237, 3.2959269419754627, -1.171840016473363, 0.2297092934684243],
    ],
    [
        [0.02867597691261294, 0.044462355844578465, 0.11076594737102324, 0.1294168144074488, 0.16463164065613053, 0.12941681440744882, 0.11076594737102327, 0.044462355844578465, 0.02867597691261294],
        [1.0, -2.4816709658865395, 5.091736135690412, -6.451900557562719, 6.586787651107716, -4.806134151989141, 2.670324096891811, -0.9817490592528939, 0.21076660277546416],
    ],
    [
        [0.0339253716762506, 0.07117608548520336, 0.16060574157535787, 0.21229493994335172, 0.25326050527665417, 0.21229493994335172, 0.16060574157535787, 0.07117608548520335, 0.03392537167625059],
        [1.0, -1.9739656962958994, 4.171662624387123, -4.863544918988305, 5.0849719326319125, -3.6408704249767347, 2.110007756033106, -0.7998920119769494, 0.19254896491967455],
    ],
    [
        [0.040517902326586364, 0.10770848117359308, 0.23749505706032123, 0.33908843061949356, 0.3948727760705881, 0.3390884306194935, 0.23749505706032117, 0.10770848117359302, 0.040517902326586336],
        [1.0, -1.424911004823012, 3.3956813271295765, -3.41593085312873, 3.841438308635902, -2.6157938338716646, 1.6252754363120616, -0.6271672329556262, 0.1751934239107205],
    ],
    [
        [0.04887512131882825, 0.15776596138750992, 0.3542720296950853, 0.5336965059170795, 0.6184023688243125, 0.5336965059170795, 0.35427202969508537, 0.15776596138750995, 0.04887512131882826],
        [1.0, -0.832994678238, 2.815163114502121, -2.0958969929337465, 2.89062260012152, -1.724789226317177, 1.2270265010247254, -0.4640186979786464, 0.15887102429234612],
    ],
    [
        [0.059574894440855966, 0.22654285402648067, 0.5296497445069142, 0.8322823289298178, 0.9681305396364496, 0.8322823289298176, 0.5296497445069142, 0.2265428540264806, 0.059574894440855966],
        [1.0, -0.197213137457387, 2.489362028874504, -0.8625046468287766, 2.271867828573883, -0.945871971614195, 0.9275556223030523, -0.31010731975838124, 0.14381330273441373],
    ],
    [
        [0.0734181799330512, 0.3213601672083867, 0.7908651305701572, 1.2891965928659872, 1.5113521629297664, 1.2891965928659872, 0.7908651305701572, 0.32136016720838667, 0.0734181799330512],
        [1.0, 0.48272962922813006, 2.484992825893144, 0.36370042709980677, 2.0376606015715155, -0.23411139604621306, 0.742294830538571, -0.16375567056115603, 0.13036128886896786],
    ],
    [
        [0.09152816579793671, 0.4525951231800016, 1.177496035209378, 1.9855379026144373, 2.3495030895206743, 1.9855379026144366, 1.177496035209378, 0.45259512318000156, 0.09152816579793667],
        [1.0, 1.2061746065447663, 2.874975896703981, 1.7128384775262602, 2.2682503134796463, 0.4887621438034669, 0.6932813250306931, -0.02097990709753096, 0.11905724851437254],
    ],
    [
        [0.11549927133587232, 0.6350386148386674, 1.7469257854251448, 3.041338638133884, 3.634013532678687, 3.0413386381338823, 1.7469257854251439, 0.6350386148386671, 0.11549927133587225],
        [1.0, 1.9712033874970636, 3.7359837951812325, 3.3781570660800457, 3.0950982467775057, 1.3501227224662664, 0.8157065478701118, 0.1262451017730005, 0.11081946340106466],
    ],
    [
        [0.1476237854978847, 0.8898802392249907, 2.582080065688307, 4.632540991251874, 5.58831841402448, 4.632540991251874, 2.5820800656883076, 0.889880239224991, 0.14762378549788477],
        [1.0, 2.7742678383021415, 5.144323919405203, 5.626616028327145, 4.735265820789662, 2.5508202664011934, 1.1698916764271359, 0.2931676897213624, 0.1072823249194959],
    ],
    [
        [0.1912401383846965, 1.2476016994659989, 3.8021686234060077, 7.013861487474277, 8.537235415809889, 7.0138614874742755, 3.802168623406007, 1.2476016994659986, 0.19124013838469645],
        [1.0, 3.609741658781741, 7.169566851912157, 8.80370680715908, 7.536974287506702, 4.402788223740835, 1.8626784036590252, 0.5082056346621973, 0.11147407601827584],
    ],
    [
        [0.2512709460757572, 1.7521383145377685, 5.577049258040684, 10.547801869502575, 12.943574182974151, 10.547801869502575, 5.577049258040683, 1.7521383145377682, 0.2512709460757572],
        [1.0, 4.469365715113051, 9.86511389218322, 13.325933925889354, 12.03144769493236, 7.385334723077518, 3.0847733927888585, 0.8242122519704437, 0.12920226874705093],
    ],
    [
        [0.33504796293571987, 2.4666387597789163, 8.14490031181777, 15.736980083834366, 19.447405497757135, 15.736980083834366, 8.14490031181777, 2.4666387597789163, 0.3350479629357198],
        [1.0, 5.3414883122678205, 13.254310214268585, 19.649828474572022, 18.974561438439544, 12.223079488694427, 5.173881603498221, 1.3399637394316146, 0.17195918965680668],
    ],
    [
        [0.45352328600886427, 3.480579989536407, 11.829201125361836, 23.247307553249694, 28.890332021308577, 23.24730755324969, 11.829201125361829, 3.4805799895364053, 0.4535232860088639],
        [1.0, 6.209720059723022, 17.30870755677844, 28.19721400091955, 29.337163756563847, 19.974531813009676, 8.71511896367144, 2.24085557254342, 0.26315215974301726],
    ],
    [
        [0.6227776841234227, 4.915187317199092, 17.0379983710653, 33.87971846479065, 42.26825954660603, 33.87971846479064, 17.037998371065296, 4.91518731719909, 0.6227776841234222],
        [1.0, 7.049569112338632, 21.908100216828092, 39.193958530864194, 44.149272006208534, 32.070776689721356, 14.678331385644622, 3.8729779460580787, 0.4516080807497132],
    ],
    [
        [0.7042492743008238, 5.595847322158514, 19.490793593143987, 38.868532239932264, 48.53867339600887, 38.868532239932264, 19.49079359314398, 5.595847322158511, 0.7042492743008234],
        [1.0, 7.351487533237439, 23.7334715666807, 43.94729005942437, 51.052776432518094, 38.10320082840874, 17.84534704210253, 4.796139898128623, 0.5665254019807355],
    ],
    [
        [0.7042492743008238, 5.595847322158514, 19.490793593143987, 38.868532239932264, 48.53867339600887, 38.868532239932264, 19.49079359314398, 5.595847322158511, 0.7042492743008234],
        [1.0, 7.351487533237439, 23.7334715666807, 43.94729005942437, 51.052776432518094, 38.10320082840874, 17.84534704210253, 4.796139898128623, 0.5665254019807355],
    ],
    [
        [0.7042492743008238, 5.595847322158514, 19.490793593143987, 38.868532239932264, 48.53867339600887, 38.868532239932264, 19.49079359314398, 5.595847322158511, 0.7042492743008234],
        [1.0, 7.351487533237439, 23.7334715666807, 43.94729005942437, 51.052776432518094, 38.10320082840874, 17.84534704210253, 4.796139898128623, 0.5665254019807355],
    ],
    [
        [0.7042492743008238, 5.595847322158514, 19.490793593143987, 38.868532239932264, 48.53867339600887, 38.868532239932264, 19.49079359314398, 5.595847322158511, 0.7042492743008234],
        [1.0, 7.351487533237439, 23.7334715666807, 43.94729005942437, 51.052776432518094, 38.10320082840874, 17.84534704210253, 4.796139898128623, 0.5665254019807355],
    ],
    [
        [0.7042492743008238, 5.595847322158514, 19.490793593143987, 38.868532239932264, 48.53867339600887, 38.868532239932264, 19.49079359314398, 5.595847322158511, 0.7042492743008234],
        [1.0, 7.351487533237439, 23.7334715666807, 43.94729005942437, 51.052776432518094, 38.10320082840874, 17.84534704210253, 4.796139898128623, 0.5665254019807355],
    ],
    [
        [0.7042492743008238, 5.595847322158514, 19.490793593143987, 38.868532239932264, 48.53867339600887, 38.868532239932264, 19.49079359314398, 5.595847322158511, 0.7042492743008234],
        [1.0, 7.351487533237439, 23.7334715666807, 43.94729005942437, 51.052776432518094, 38.10320082840874, 17.84534704210253, 4.796139898128623, 0.5665254019807355],
    ],
    [
        [0.7042492743008238, 5.595847322158514, 19.490793593143987, 38.868532239932264, 48.53867339600887, 38.868532239932264, 19.49079359314398, 5.595847322158511, 0.7042492743008234],
        [1.0, 7.351487533237439, 23.7334715666807, 43.94729005942437, 51.052776432518094, 38.10320082840874, 17.84534704210253, 4.796139898128623, 0.5665254019807355],
    ],
    [
        [0.7042492743008238, 5.595847322158514, 19.490793593143987, 38.868532239932264, 48.53867339600887, 38.868532239932264, 19.49079359314398, 5.595847322158511, 0.7042492743008234],
        [1.0, 7.351487533237439, 23.7334715666807, 43.94729005942437, 51.052776432518094, 38.10320082840874, 17.84534704210253, 4.796139898128623, 0.5665254019807355],
    ],
    [
        [0.7042492743008238, 5.595847322158514, 19.490793593143987, 38.868532239932264, 48.53867339600887, 38.868532239932264, 19.49079359314398, 5.595847322158511, 0.7042492743008234],
        [1.0, 7.351487533237439, 23.7334715666807, 43.94729005942437, 51.052776432518094, 38.10320082840874, 17.84534704210253, 4.796139898128623, 0.5665254019807355],
    ],
    [
        [0.7042492743008238, 5.595847322158514, 19.490793593143987, 38.868532239932264, 48.53867339600887, 38.868532239932264, 19.49079359314398, 5.595847322158511, 0.7042492743008234],
        [1.0, 7.351487533237439, 23.7334715666807, 43.94729005942437, 51.052776432518094, 38.10320082840874, 17.84534704210253, 4.796139898128623, 0.5665254019807355],
    ],
    [
        [0.7042492743008238, 5.595847322158514, 19.490793593143987, 38.868532239932264, 48.53867339600887, 38.868532239932264, 19.49079359314398, 5.595847322158511, 0.7042492743008234],
        [1.0, 7.351487533237439, 23.7334715666807, 43.94729005942437, 51.052776432518094, 38.10320082840874, 17.84534704210253, 4.796139898128623, 0.5665254019807355],
    ],
    [
        [0.7042492743008238, 5.595847322158514, 19.490793593143987, 38.868532239932264, 48.53867339600887, 38.868532239932264, 19.49079359314398, 5.595847322158511, 0.7042492743008234],
        [1.0, 7.351487533237439, 23.7334715666807, 43.94729005942437, 51.052776432518094, 38.10320082840874, 17.84534704210253, 4.796139898128623, 0.5665254019807355],
    ],
    [
        [0.7042492743008238, 5.595847322158514, 19.490793593143987, 38.868532239932264, 48.53867339600887, 38.868532239932264, 19.49079359314398, 5.595847322158511, 0.7042492743008234],
        [1.0, 7.351487533237439, 23.7334715666807, 43.94729005942437, 51.052776432518094, 38.10320082840874, 17.84534704210253, 4.796139898128623, 0.5665254019807355],
    ],
    [
        [0.7042492743008238, 5.595847322158514, 19.490793593143987, 38.868532239932264, 48.53867339600887, 38.868532239932264, 19.49079359314398, 5.595847322158511, 0.7042492743008234],
        [1.0, 7.351487533237439, 23.7334715666807, 43.94729005942437, 51.052776432518094, 38.10320082840874, 17.84534704210253, 4.796139898128623, 0.5665254019807355],
    ],
    [
        [0.7042492743008238, 5.595847322158514, 19.490793593143987, 38.868532239932264, 48.53867339600887, 38.868532239932264, 19.49079359314398, 5.595847322158511, 0.7042492743008234],
        [1.0, 7.351487533237439, 23.7334715666807, 43.94729005942437, 51.052776432518094, 38.10320082840874, 17.84534704210253, 4.796139898128623, 0.5665254019807355],
    ],
    [
        [0.7042492743008238, 5.595847322158514, 19.490793593143987, 38.868532239932264, 48.53867339600887, 38.868532239932264, 19.49079359314398, 5.595847322158511, 0.7042492743008234],
        [1.0, 7.351487533237439, 23.7334715666807, 43.94729005942437, 51.052776432518094, 38.10320082840874, 17.84534704210253, 4.796139898128623, 0.5665254019807355],
    ],
    [
        [0.7042492743008238, 5.595847322158514, 19.490793593143987, 38.868532239932264, 48.53867339600887, 38.868532239932264, 19.49079359314398, 5.595847322158511, 0.7042492743008234],
        [1.0, 7.351487533237439, 23.7334715666807, 43.94729005942437, 51.052776432518094, 38.10320082840874, 17.84534704210253, 4.796139898128623, 0.5665254019807355],
    ],
    [
        [0.7042492743008238, 5.595847322158514, 19.490793593143987, 38.868532239932264, 48.53867339600887, 38.868532239932264, 19.49079359314398, 5.595847322158511, 0.7042492743008234],
        [1.0, 7.351487533237439, 23.7334715666807, 43.94729005942437, 51.052776432518094, 38.10320082840874, 17.84534704210253, 4.796139898128623, 0.5665254019807355],
    ],
    [
        [0.7042492743008238, 5.595847322158514, 19.490793593143987, 38.868532239932264, 48.53867339600887, 38.868532239932264, 19.49079359314398, 5.595847322158511, 0.7042492743008234],
        [1.0, 7.351487533237439, 23.7334715666807, 43.94729005942437, 51.052776432518094, 38.10320082840874, 17.84534704210253, 4.796139898128623, 0.5665254019807355],
    ],
    [
        [0.7042492743008238, 5.595847322158514, 19.490793593143987, 38.868532239932264, 48.53867339600887, 38.868532239932264, 19.49079359314398, 5.595847322158511, 0.7042492743008234],
        [1.0, 7.351487533237439, 23.7334715666807, 43.94729005942437, 51.052776432518094, 38.10320082840874, 17.84534704210253, 4.796139898128623, 0.5665254019807355],
    ],
    [
        [0.7042492743008238, 5.595847322158514, 19.490793593143987, 38.868532239932264, 48.53867339600887, 38.868532239932264, 19.49079359314398, 5.595847322158511, 0.7042492743008234],
        [1.0, 7.351487533237439, 23.7334715666807, 43.94729005942437, 51.052776432518094, 38.10320082840874, 17.84534704210253, 4.796139898128623, 0.5665254019807355],
    ],
    [
        [0.7042492743008238, 5.595847322158514, 19.490793593143987, 38.868532239932264, 48.53867339600887, 38.868532239932264, 19.49079359314398, 5.595847322158511, 0.7042492743008234],
        [1.0, 7.351487533237439, 23.7334715666807, 43.94729005942437, 51.052776432518094, 38.10320082840874, 17.84534704210253, 4.796139898128623, 0.5665254019807355],
    ],
    [
        [0.7042492743008238, 5.595847322158514, 19.490793593143987, 38.868532239932264, 48.53867339600887, 38.868532239932264, 19.49079359314398, 5.595847322158511, 0.7042492743008234],
        [1.0, 7.351487533237439, 23.7334715666807, 43.94729005942437, 51.052776432518094, 38.10320082840874, 17.84534704210253, 4.796139898128623, 0.5665254019807355],
    ],
    [
        [0.7042492743008238, 5.595847322158514, 19.490793593143987, 38.868532239932264, 48.53867339600887, 38.868532239932264, 19.49079359314398, 5.595847322158511, 0.7042492743008234],
        [1.0, 7.351487533237439, 23.7334715666807, 43.94729005942437, 51.052776432518094, 38.10320082840874, 17.84534704210253, 4.796139898128623, 0.5665254019807355],
    ],
    [
        [0.7042492743008238, 5.595847322158514, 19.490793593143987, 38.868532239932264, 48.53867339600887, 38.868532239932264, 19.49079359314398, 5.595847322158511, 0.7042492743008234],
        [1.0, 7.351487533237439, 23.7334715666807, 43.94729005942437, 51.052776432518094, 38.10320082840874, 17.84534704210253, 4.796139898128623, 0.5665254019807355],
    ],
    [
        [0.7042492743008238, 5.595847322158514, 19.490793593143987, 38.868532239932264, 48.53867339600887, 38.868532239932264, 19.49079359314398, 5.595847322158511, 0.7042492743008234],
        [1.0, 7.351487533237439, 23.7334715666807, 43.94729005942437, 51.052776432518094, 38.10320082840874, 17.84534704210253, 4.796139898128623, 0.5665254019807355],
    ],
    [
        [0.7042492743008238, 5.595847322158514, 19.490793593143987, 38.868532239932264, 48.53867339600887, 38.868532239932264, 19.49079359314398, 5.595847322158511, 0.7042492743008234],
        [1.0, 7.351487533237439, 23.7334715666807, 43.94729005942437, 51.052776432518094, 38.10320082840874, 17.84534704210253, 4.796139898128623, 0.5665254019807355],
    ],
    [
        [0.7042492743008238, 5.595847322158514, 19.490793593143987, 38.868532239932264, 48.53867339600887, 38.868532239932264, 19.49079359314398, 5.595847322158511, 0.7042492743008234],
        [1.0, 7.351487533237439, 23.7334715666807, 43.94729005942437, 51.052776432518094, 38.10320082840874, 17.84534704210253, 4.796139898128623, 0.5665254019807355],
    ],
    [
        [0.7042492743008238, 5.595847322158514, 19.490793593143987, 38.868532239932264, 48.53867339600887, 38.868532239932264, 19.49079359314398, 5.595847322158511, 0.7042492743008234],
        [1.0, 7.351487533237439, 23.7334715666807, 43.94729005942437, 51.052776432518094, 38.10320082840874, 17.84534704210253, 4.796139898128623, 0.5665254019807355],
    ],
    [
        [0.7042492743008238, 5.595847322158514, 19.490793593143987, 38.868532239932264, 48.53867339600887, 38.868532239932264, 19.49079359314398, 5.595847322158511, 0.7042492743008234],
        [1.0, 7.351487533237439, 23.7334715666807, 43.94729005942437, 51.052776432518094, 38.10320082840874, 17.84534704210253, 4.796139898128623, 0.5665254019807355],
    ],
    [
        [0.7042492743008238, 5.595847322158514, 19.490793593143987, 38.868532239932264, 48.53867339600887, 38.868532239932264, 19.49079359314398, 5.595847322158511, 0.7042492743008234],
        [1.0, 7.351487533237439, 23.7334715666807, 43.94729005942437, 51.052776432518094, 38.10320082840874, 17.84534704210253, 4.796139898128623, 0.5665254019807355],
    ],
    [
        [0.7042492743008238, 5.595847322158514, 19.490793593143987, 38.868532239932264, 48.53867339600887, 38.868532239932264, 19.49079359314398, 5.595847322158511, 0.7042492743008234],
        [1.0, 7.351487533237439, 23.7334715666807, 43.94729005942437, 51.052776432518094, 38.10320082840874, 17.84534704210253, 4.796139898128623, 0.5665254019807355],
    ],
    [
        [0.7042492743008238, 5.595847322158514, 19.490793593143987, 38.868532239932264, 48.53867339600887, 38.868532239932264, 19.49079359314398, 5.595847322158511, 0.7042492743008234],
        [1.0, 7.351487533237439, 23.7334715666807, 43.94729005942437, 51.052776432518094, 38.10320082840874, 17.84534704210253, 4.796139898128623, 0.5665254019807355],
    ],
    [
        [0.7042492743008238, 5.595847322158514, 19.490793593143987, 38.868532239932264, 48.53867339600887, 38.868532239932264, 19.49079359314398, 5.595847322158511, 0.7042492743008234],
        [1.0, 7.351487533237439, 23.7334715666807, 43.94729005942437, 51.052776432518094, 38.10320082840874, 17.84534704210253, 4.796139898128623, 0.5665254019807355],
    ],
    [
        [0.7042492743008238, 5.595847322158514, 19.490793593143987, 38.868532239932264, 48.53867339600887, 38.868532239932264, 19.49079359314398, 5.595847322158511, 0.7042492743008234],
        [1.0, 7.351487533237439, 23.7334715666807, 43.94729005942437, 51.052776432518094, 38.10320082840874, 17.84534704210253, 4.796139898128623, 0.5665254019807355],
    ],
    [
        [0.7042492743008238, 5.595847322158514, 19.490793593143987, 38.868532239932264, 48.53867339600887, 38.868532239932264, 19.49079359314398, 5.595847322158511, 0.7042492743008234],
        [1.0, 7.351487533237439, 23.7334715666807, 43.94729005942437, 51.052776432518094, 38.10320082840874, 17.84534704210253, 4.796139898128623, 0.5665254019807355],
    ],
    [
        [0.7042492743008238, 5.595847322158514, 19.490793593143987, 38.868532239932264, 48.53867339600887, 38.868532239932264, 19.49079359314398, 5.595847322158511, 0.7042492743008234],
        [1.0, 7.351487533237439, 23.7334715666807, 43.94729005942437, 51.052776432518094, 38.10320082840874, 17.84534704210253, 4.796139898128623, 0.5665254019807355],
    ],
    [
        [0.7042492743008238, 5.595847322158514, 19.490793593143987, 38.868532239932264, 48.53867339600887, 38.868532239932264, 19.49079359314398, 5.595847322158511, 0.7042492743008234],
        [1.0, 7.351487533237439, 23.7334715666807, 43.94729005942437, 51.052776432518094, 38.10320082840874, 17.84534704210253, 4.796139898128623, 0.5665254019807355],
    ],
    [
        [0.7042492743008238, 5.595847322158514, 19.490793593143987, 38.868532239932264, 48.53867339600887, 38.868532239932264, 19.49079359314398, 5.595847322158511, 0.7042492743008234],
        [1.0, 7.351487533237439, 23.7334715666807, 43.94729005942437, 51.052776432518094, 38.10320082840874, 17.84534704210253, 4.796139898128623, 0.5665254019807355],
    ],
    [
        [0.7042492743008238, 5.595847322158514, 19.490793593143987, 38.868532239932264, 48.53867339600887, 38.868532239932264, 19.49079359314398, 5.595847322158511, 0.7042492743008234],
        [1.0, 7.351487533237439, 23.7334715666807, 43.94729005942437, 51.052776432518094, 38.10320082840874, 17.84534704210253, 4.796139898128623, 0.5665254019807355],
    ],
];
