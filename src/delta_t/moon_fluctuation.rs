// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Tabulated lunar fluctuation term of ΔT, 1681.0–1936.5 in steps of 0.1 yr.
//!
//! Values from Spencer Jones (1939), in units of the lunar longitude
//! residual; multiply by 0.07 to obtain seconds of ΔT.

/// First tabulated year.
pub(super) const FIRST_YEAR: f64 = 1681.0;
/// Last tabulated year.
pub(super) const LAST_YEAR: f64 = 1936.5;
/// Seconds of ΔT per table unit.
pub(super) const SCALE: f64 = 0.07;

#[rustfmt::skip]
pub(super) const TABLE: [f64; 2555] = [
    -12.720, -12.691, -12.662, -12.632, -12.603, -12.574, -12.545, -12.516, -12.486, -12.457,
    -12.428, -12.399, -12.369, -12.340, -12.311, -12.282, -12.253, -12.223, -12.194, -12.165,
    -12.136, -12.107, -12.077, -12.048, -12.019, -11.990, -11.960, -11.931, -11.902, -11.873,
    -11.843, -11.814, -11.785, -11.756, -11.726, -11.697, -11.668, -11.639, -11.609, -11.580,
    -11.551, -11.522, -11.492, -11.463, -11.434, -11.404, -11.375, -11.346, -11.317, -11.287,
    -11.258, -11.229, -11.199, -11.170, -11.141, -11.111, -11.082, -11.053, -11.023, -10.994,
    -10.965, -10.935, -10.906, -10.877, -10.847, -10.818, -10.788, -10.759, -10.730, -10.700,
    -10.671, -10.641, -10.612, -10.583, -10.553, -10.524, -10.494, -10.465, -10.435, -10.406,
    -10.376, -10.347, -10.317, -10.288, -10.258, -10.229, -10.199, -10.170, -10.140, -10.111,
    -10.081, -10.052, -10.022, -09.993, -09.963, -09.934, -09.904, -09.874, -09.845, -09.815,
    -09.786, -09.756, -09.726, -09.697, -09.667, -09.637, -09.608, -09.578, -09.548, -09.519,
    -09.489, -09.459, -09.430, -09.400, -09.370, -09.340, -09.311, -09.281, -09.251, -09.221,
    -09.191, -09.162, -09.132, -09.102, -09.072, -09.042, -09.013, -08.983, -08.953, -08.923,
    -08.893, -08.863, -08.833, -08.803, -08.773, -08.743, -08.713, -08.683, -08.653, -08.623,
    -08.593, -08.563, -08.533, -08.503, -08.473, -08.443, -08.413, -08.383, -08.353, -08.323,
    -08.293, -08.263, -08.232, -08.202, -08.172, -08.142, -08.112, -08.082, -08.051, -08.021,
    -07.991, -07.961, -07.930, -07.900, -07.870, -07.839, -07.809, -07.779, -07.748, -07.718,
    -07.688, -07.657, -07.627, -07.596, -07.566, -07.535, -07.505, -07.474, -07.444, -07.413,
    -07.383, -07.352, -07.322, -07.291, -07.261, -07.230, -07.199, -07.169, -07.138, -07.107,
    -07.077, -07.046, -07.015, -06.985, -06.954, -06.923, -06.892, -06.862, -06.831, -06.800,
    -06.769, -06.738, -06.707, -06.676, -06.646, -06.615, -06.584, -06.553, -06.522, -06.491,
    -06.460, -06.429, -06.398, -06.367, -06.336, -06.304, -06.273, -06.242, -06.211, -06.180,
    -06.149, -06.118, -06.086, -06.055, -06.024, -05.993, -05.961, -05.930, -05.899, -05.867,
    -05.836, -05.805, -05.773, -05.742, -05.710, -05.679, -05.647, -05.616, -05.584, -05.553,
    -05.521, -05.490, -05.458, -05.426, -05.395, -05.363, -05.331, -05.300, -05.268, -05.236,
    -05.204, -05.173, -05.141, -05.109, -05.077, -05.045, -05.013, -04.982, -04.950, -04.918,
    -04.886, -04.854, -04.822, -04.790, -04.758, -04.726, -04.693, -04.661, -04.629, -04.597,
    -04.565, -04.533, -04.500, -04.468, -04.436, -04.404, -04.371, -04.339, -04.307, -04.274,
    -04.242, -04.209, -04.177, -04.144, -04.112, -04.079, -04.047, -04.014, -03.982, -03.949,
    -03.916, -03.884, -03.851, -03.818, -03.785, -03.753, -03.720, -03.687, -03.654, -03.621,
    -03.588, -03.556, -03.523, -03.490, -03.457, -03.424, -03.391, -03.357, -03.324, -03.291,
    -03.258, -03.225, -03.192, -03.158, -03.125, -03.092, -03.058, -03.025, -02.992, -02.958,
    -02.925, -02.891, -02.858, -02.824, -02.791, -02.757, -02.723, -02.690, -02.656, -02.622,
    -02.589, -02.555, -02.521, -02.487, -02.453, -02.419, -02.385, -02.351, -02.317, -02.283,
    -02.249, -02.215, -02.181, -02.147, -02.112, -02.078, -02.044, -02.009, -01.975, -01.941,
    -01.906, -01.872, -01.837, -01.803, -01.768, -01.733, -01.699, -01.664, -01.629, -01.594,
    -01.559, -01.525, -01.490, -01.455, -01.420, -01.385, -01.350, -01.315, -01.279, -01.244,
    -01.209, -01.174, -01.138, -01.103, -01.068, -01.032, -00.997, -00.961, -00.926, -00.890,
    -00.854, -00.819, -00.783, -00.747, -00.711, -00.675, -00.639, -00.603, -00.567, -00.531,
    -00.495, -00.459, -00.423, -00.387, -00.350, -00.314, -00.278, -00.241, -00.205, -00.168,
    -00.132, -00.095, -00.058, -00.022, 00.015, 00.052, 00.089, 00.126, 00.163, 00.200,
    00.237, 00.274, 00.311, 00.348, 00.385, 00.423, 00.460, 00.497, 00.535, 00.572,
    00.610, 00.647, 00.685, 00.723, 00.761, 00.798, 00.836, 00.874, 00.912, 00.950,
    00.988, 01.026, 01.065, 01.103, 01.141, 01.180, 01.218, 01.257, 01.295, 01.334,
    01.372, 01.411, 01.450, 01.489, 01.527, 01.566, 01.605, 01.644, 01.683, 01.723,
    01.762, 01.801, 01.840, 01.880, 01.919, 01.959, 01.998, 02.038, 02.078, 02.117,
    02.157, 02.197, 02.237, 02.277, 02.317, 02.357, 02.397, 02.437, 02.478, 02.518,
    02.558, 02.598, 02.639, 02.679, 02.720, 02.760, 02.800, 02.841, 02.881, 02.922,
    02.962, 03.003, 03.043, 03.084, 03.124, 03.165, 03.205, 03.246, 03.286, 03.326,
    03.367, 03.407, 03.448, 03.488, 03.528, 03.568, 03.609, 03.649, 03.689, 03.729,
    03.769, 03.809, 03.849, 03.889, 03.929, 03.968, 04.008, 04.048, 04.087, 04.127,
    04.166, 04.205, 04.245, 04.284, 04.323, 04.362, 04.401, 04.440, 04.478, 04.517,
    04.555, 04.594, 04.632, 04.670, 04.708, 04.746, 04.784, 04.822, 04.859, 04.896,
    04.934, 04.971, 05.008, 05.045, 05.082, 05.118, 05.155, 05.191, 05.227, 05.263,
    05.299, 05.334, 05.370, 05.405, 05.440, 05.475, 05.510, 05.545, 05.579, 05.613,
    05.647, 05.681, 05.715, 05.748, 05.782, 05.815, 05.848, 05.880, 05.913, 05.945,
    05.977, 06.009, 06.040, 06.072, 06.103, 06.134, 06.165, 06.195, 06.226, 06.256,
    06.286, 06.315, 06.345, 06.374, 06.404, 06.433, 06.461, 06.490, 06.519, 06.547,
    06.575, 06.603, 06.631, 06.659, 06.686, 06.713, 06.741, 06.768, 06.794, 06.821,
    06.848, 06.874, 06.900, 06.927, 06.953, 06.979, 07.004, 07.030, 07.055, 07.081,
    07.106, 07.131, 07.156, 07.181, 07.206, 07.231, 07.255, 07.280, 07.304, 07.329,
    07.353, 07.377, 07.401, 07.425, 07.449, 07.472, 07.496, 07.520, 07.543, 07.567,
    07.590, 07.613, 07.637, 07.660, 07.683, 07.706, 07.729, 07.752, 07.775, 07.798,
    07.820, 07.843, 07.866, 07.889, 07.911, 07.934, 07.956, 07.979, 08.002, 08.024,
    08.047, 08.069, 08.092, 08.114, 08.136, 08.159, 08.181, 08.204, 08.226, 08.248,
    08.271, 08.293, 08.316, 08.338, 08.361, 08.383, 08.406, 08.428, 08.451, 08.473,
    08.496, 08.518, 08.541, 08.564, 08.587, 08.609, 08.632, 08.655, 08.678, 08.700,
    08.723, 08.746, 08.769, 08.792, 08.815, 08.838, 08.861, 08.884, 08.907, 08.930,
    08.953, 08.976, 09.000, 09.023, 09.046, 09.069, 09.092, 09.115, 09.139, 09.162,
    09.185, 09.208, 09.231, 09.255, 09.278, 09.301, 09.325, 09.348, 09.371, 09.394,
    09.418, 09.441, 09.464, 09.488, 09.511, 09.534, 09.558, 09.581, 09.604, 09.628,
    09.651, 09.674, 09.698, 09.721, 09.744, 09.768, 09.791, 09.814, 09.837, 09.861,
    09.884, 09.907, 09.930, 09.954, 09.977, 10.000, 10.023, 10.047, 10.070, 10.093,
    10.116, 10.139, 10.162, 10.185, 10.209, 10.232, 10.255, 10.278, 10.301, 10.324,
    10.347, 10.370, 10.393, 10.415, 10.438, 10.461, 10.484, 10.507, 10.530, 10.552,
    10.575, 10.598, 10.621, 10.643, 10.666, 10.688, 10.711, 10.734, 10.756, 10.779,
    10.801, 10.824, 10.846, 10.868, 10.891, 10.913, 10.935, 10.958, 10.980, 11.002,
    11.024, 11.047, 11.069, 11.091, 11.113, 11.135, 11.157, 11.179, 11.201, 11.223,
    11.245, 11.266, 11.288, 11.310, 11.332, 11.353, 11.375, 11.397, 11.418, 11.440,
    11.462, 11.483, 11.504, 11.526, 11.547, 11.569, 11.590, 11.611, 11.632, 11.654,
    11.675, 11.696, 11.717, 11.738, 11.759, 11.780, 11.801, 11.822, 11.843, 11.863,
    11.884, 11.905, 11.926, 11.946, 11.967, 11.987, 12.008, 12.028, 12.049, 12.069,
    12.089, 12.110, 12.130, 12.150, 12.170, 12.190, 12.210, 12.230, 12.250, 12.270,
    12.290, 12.310, 12.330, 12.349, 12.369, 12.389, 12.408, 12.428, 12.447, 12.467,
    12.486, 12.505, 12.525, 12.544, 12.563, 12.582, 12.601, 12.620, 12.639, 12.658,
    12.677, 12.696, 12.714, 12.733, 12.752, 12.770, 12.789, 12.807, 12.826, 12.844,
    12.862, 12.881, 12.899, 12.917, 12.935, 12.953, 12.971, 12.989, 13.007, 13.025,
    13.042, 13.060, 13.078, 13.095, 13.113, 13.130, 13.148, 13.165, 13.182, 13.199,
    13.216, 13.234, 13.251, 13.267, 13.284, 13.301, 13.318, 13.335, 13.351, 13.368,
    13.384, 13.401, 13.417, 13.433, 13.450, 13.466, 13.482, 13.498, 13.514, 13.530,
    13.546, 13.561, 13.577, 13.593, 13.608, 13.624, 13.639, 13.654, 13.670, 13.685,
    13.700, 13.715, 13.730, 13.745, 13.760, 13.775, 13.789, 13.804, 13.818, 13.833,
    13.847, 13.861, 13.876, 13.890, 13.904, 13.918, 13.932, 13.946, 13.959, 13.973,
    13.986, 14.000, 14.013, 14.027, 14.040, 14.053, 14.066, 14.079, 14.092, 14.105,
    14.117, 14.130, 14.142, 14.155, 14.167, 14.179, 14.192, 14.204, 14.216, 14.227,
    14.239, 14.251, 14.262, 14.274, 14.285, 14.296, 14.308, 14.319, 14.330, 14.341,
    14.351, 14.362, 14.373, 14.383, 14.394, 14.404, 14.414, 14.424, 14.434, 14.444,
    14.454, 14.463, 14.473, 14.482, 14.492, 14.501, 14.510, 14.519, 14.528, 14.537,
    14.545, 14.554, 14.562, 14.571, 14.579, 14.587, 14.595, 14.603, 14.610, 14.618,
    14.626, 14.633, 14.640, 14.647, 14.654, 14.661, 14.668, 14.675, 14.681, 14.688,
    14.694, 14.700, 14.706, 14.712, 14.718, 14.724, 14.730, 14.735, 14.740, 14.745,
    14.751, 14.755, 14.760, 14.765, 14.770, 14.774, 14.778, 14.782, 14.786, 14.790,
    14.794, 14.798, 14.801, 14.805, 14.808, 14.811, 14.814, 14.817, 14.819, 14.822,
    14.824, 14.826, 14.829, 14.831, 14.832, 14.834, 14.836, 14.837, 14.838, 14.839,
    14.840, 14.841, 14.842, 14.842, 14.843, 14.843, 14.843, 14.843, 14.843, 14.843,
    14.842, 14.841, 14.841, 14.840, 14.839, 14.837, 14.836, 14.834, 14.833, 14.831,
    14.829, 14.827, 14.824, 14.822, 14.819, 14.817, 14.814, 14.811, 14.807, 14.804,
    14.800, 14.797, 14.793, 14.789, 14.785, 14.780, 14.776, 14.771, 14.766, 14.761,
    14.756, 14.751, 14.746, 14.740, 14.734, 14.728, 14.722, 14.716, 14.709, 14.703,
    14.696, 14.689, 14.682, 14.675, 14.667, 14.660, 14.652, 14.644, 14.636, 14.628,
    14.619, 14.611, 14.602, 14.593, 14.584, 14.575, 14.565, 14.555, 14.546, 14.536,
    14.526, 14.515, 14.505, 14.494, 14.483, 14.472, 14.461, 14.450, 14.438, 14.427,
    14.415, 14.403, 14.391, 14.379, 14.366, 14.354, 14.341, 14.329, 14.316, 14.303,
    14.289, 14.276, 14.263, 14.249, 14.235, 14.222, 14.208, 14.194, 14.179, 14.165,
    14.151, 14.136, 14.122, 14.107, 14.092, 14.077, 14.062, 14.047, 14.032, 14.017,
    14.001, 13.986, 13.970, 13.955, 13.939, 13.923, 13.908, 13.892, 13.876, 13.860,
    13.843, 13.827, 13.811, 13.795, 13.778, 13.762, 13.745, 13.729, 13.712, 13.695,
    13.679, 13.662, 13.645, 13.628, 13.612, 13.595, 13.578, 13.561, 13.544, 13.527,
    13.510, 13.493, 13.476, 13.459, 13.441, 13.424, 13.407, 13.390, 13.373, 13.356,
    13.338, 13.321, 13.304, 13.287, 13.270, 13.253, 13.236, 13.218, 13.201, 13.184,
    13.167, 13.150, 13.133, 13.116, 13.099, 13.082, 13.065, 13.048, 13.031, 13.014,
    12.998, 12.981, 12.964, 12.947, 12.931, 12.914, 12.897, 12.881, 12.864, 12.847,
    12.831, 12.814, 12.798, 12.781, 12.765, 12.748, 12.732, 12.716, 12.699, 12.683,
    12.667, 12.650, 12.634, 12.618, 12.602, 12.585, 12.569, 12.553, 12.537, 12.521,
    12.504, 12.488, 12.472, 12.456, 12.440, 12.424, 12.408, 12.392, 12.376, 12.360,
    12.344, 12.328, 12.312, 12.296, 12.280, 12.265, 12.249, 12.233, 12.217, 12.201,
    12.185, 12.169, 12.154, 12.138, 12.122, 12.106, 12.090, 12.075, 12.059, 12.043,
    12.027, 12.012, 11.996, 11.980, 11.965, 11.949, 11.933, 11.917, 11.902, 11.886,
    11.870, 11.855, 11.839, 11.823, 11.808, 11.792, 11.776, 11.761, 11.745, 11.730,
    11.714, 11.698, 11.683, 11.667, 11.652, 11.636, 11.621, 11.606, 11.590, 11.575,
    11.560, 11.545, 11.530, 11.515, 11.500, 11.485, 11.470, 11.455, 11.441, 11.426,
    11.412, 11.397, 11.383, 11.369, 11.355, 11.341, 11.327, 11.314, 11.300, 11.286,
    11.273, 11.260, 11.247, 11.234, 11.221, 11.208, 11.196, 11.183, 11.171, 11.158,
    11.146, 11.134, 11.122, 11.109, 11.097, 11.085, 11.074, 11.062, 11.050, 11.038,
    11.026, 11.014, 11.003, 10.991, 10.979, 10.968, 10.956, 10.944, 10.932, 10.921,
    10.909, 10.897, 10.885, 10.873, 10.861, 10.849, 10.837, 10.825, 10.813, 10.801,
    10.789, 10.776, 10.764, 10.751, 10.738, 10.726, 10.713, 10.700, 10.687, 10.674,
    10.660, 10.647, 10.633, 10.619, 10.605, 10.591, 10.577, 10.563, 10.548, 10.534,
    10.519, 10.504, 10.488, 10.473, 10.457, 10.441, 10.425, 10.409, 10.392, 10.376,
    10.359, 10.342, 10.324, 10.306, 10.288, 10.270, 10.252, 10.233, 10.214, 10.195,
    10.175, 10.155, 10.135, 10.115, 10.094, 10.073, 10.052, 10.030, 10.008, 09.985,
    09.963, 09.940, 09.917, 09.893, 09.869, 09.845, 09.820, 09.795, 09.770, 09.745,
    09.719, 09.693, 09.667, 09.641, 09.614, 09.587, 09.559, 09.532, 09.504, 09.476,
    09.447, 09.419, 09.390, 09.361, 09.331, 09.301, 09.272, 09.242, 09.211, 09.181,
    09.150, 09.119, 09.088, 09.056, 09.025, 08.993, 08.961, 08.928, 08.896, 08.863,
    08.831, 08.798, 08.764, 08.731, 08.697, 08.664, 08.630, 08.596, 08.561, 08.527,
    08.492, 08.458, 08.423, 08.388, 08.353, 08.317, 08.282, 08.246, 08.211, 08.175,
    08.139, 08.103, 08.067, 08.030, 07.994, 07.957, 07.921, 07.884, 07.847, 07.810,
    07.773, 07.736, 07.699, 07.662, 07.624, 07.587, 07.549, 07.512, 07.474, 07.437,
    07.399, 07.361, 07.323, 07.285, 07.247, 07.209, 07.171, 07.133, 07.095, 07.057,
    07.019, 06.980, 06.942, 06.904, 06.866, 06.827, 06.789, 06.751, 06.713, 06.674,
    06.636, 06.598, 06.560, 06.522, 06.484, 06.446, 06.409, 06.371, 06.333, 06.296,
    06.259, 06.221, 06.184, 06.148, 06.111, 06.074, 06.038, 06.002, 05.966, 05.931,
    05.895, 05.860, 05.825, 05.790, 05.756, 05.722, 05.688, 05.654, 05.621, 05.588,
    05.556, 05.523, 05.491, 05.460, 05.429, 05.398, 05.367, 05.337, 05.308, 05.279,
    05.250, 05.221, 05.194, 05.166, 05.139, 05.113, 05.087, 05.061, 05.036, 05.011,
    04.987, 04.964, 04.941, 04.919, 04.897, 04.875, 04.855, 04.835, 04.815, 04.796,
    04.777, 04.759, 04.741, 04.724, 04.708, 04.691, 04.676, 04.661, 04.646, 04.631,
    04.617, 04.604, 04.591, 04.578, 04.566, 04.554, 04.542, 04.531, 04.520, 04.510,
    04.500, 04.490, 04.480, 04.471, 04.462, 04.454, 04.446, 04.438, 04.430, 04.422,
    04.415, 04.408, 04.402, 04.395, 04.389, 04.383, 04.377, 04.371, 04.366, 04.361,
    04.355, 04.350, 04.346, 04.341, 04.336, 04.332, 04.328, 04.323, 04.319, 04.315,
    04.311, 04.308, 04.304, 04.300, 04.296, 04.293, 04.289, 04.285, 04.282, 04.278,
    04.275, 04.271, 04.268, 04.264, 04.261, 04.257, 04.253, 04.249, 04.246, 04.242,
    04.238, 04.234, 04.230, 04.226, 04.221, 04.217, 04.212, 04.208, 04.203, 04.198,
    04.193, 04.188, 04.183, 04.177, 04.171, 04.165, 04.159, 04.153, 04.147, 04.140,
    04.133, 04.126, 04.118, 04.111, 04.103, 04.095, 04.086, 04.078, 04.069, 04.059,
    04.050, 04.040, 04.030, 04.019, 04.009, 03.997, 03.986, 03.974, 03.962, 03.949,
    03.937, 03.923, 03.910, 03.896, 03.882, 03.867, 03.853, 03.838, 03.823, 03.807,
    03.791, 03.776, 03.760, 03.743, 03.727, 03.710, 03.693, 03.676, 03.659, 03.642,
    03.625, 03.607, 03.590, 03.572, 03.554, 03.537, 03.519, 03.501, 03.483, 03.465,
    03.447, 03.429, 03.412, 03.394, 03.376, 03.358, 03.340, 03.323, 03.305, 03.287,
    03.270, 03.252, 03.235, 03.217, 03.200, 03.182, 03.164, 03.147, 03.129, 03.111,
    03.094, 03.076, 03.058, 03.040, 03.022, 03.004, 02.985, 02.967, 02.949, 02.930,
    02.911, 02.893, 02.874, 02.855, 02.835, 02.816, 02.796, 02.777, 02.757, 02.737,
    02.716, 02.696, 02.675, 02.654, 02.633, 02.612, 02.590, 02.568, 02.546, 02.524,
    02.501, 02.478, 02.455, 02.431, 02.407, 02.383, 02.359, 02.334, 02.309, 02.284,
    02.258, 02.233, 02.206, 02.180, 02.153, 02.126, 02.099, 02.072, 02.044, 02.016,
    01.988, 01.960, 01.931, 01.902, 01.873, 01.844, 01.814, 01.785, 01.755, 01.725,
    01.694, 01.664, 01.633, 01.602, 01.571, 01.540, 01.509, 01.477, 01.445, 01.413,
    01.381, 01.349, 01.317, 01.284, 01.252, 01.219, 01.186, 01.153, 01.120, 01.087,
    01.054, 01.020, 00.987, 00.953, 00.920, 00.886, 00.852, 00.818, 00.784, 00.750,
    00.715, 00.680, 00.645, 00.609, 00.574, 00.537, 00.500, 00.463, 00.426, 00.387,
    00.348, 00.309, 00.269, 00.228, 00.187, 00.145, 00.102, 00.058, 00.013, -00.032,
    -00.079, -00.126, -00.174, -00.223, -00.274, -00.325, -00.378, -00.431, -00.486, -00.542,
    -00.599, -00.658, -00.718, -00.779, -00.841, -00.905, -00.970, -01.037, -01.105, -01.175,
    -01.247, -01.320, -01.394, -01.471, -01.549, -01.628, -01.710, -01.793, -01.877, -01.964,
    -02.051, -02.140, -02.230, -02.322, -02.415, -02.508, -02.603, -02.699, -02.796, -02.893,
    -02.992, -03.091, -03.191, -03.291, -03.392, -03.494, -03.596, -03.698, -03.801, -03.903,
    -04.006, -04.109, -04.212, -04.315, -04.418, -04.521, -04.624, -04.726, -04.828, -04.929,
    -05.030, -05.131, -05.231, -05.330, -05.428, -05.526, -05.623, -05.719, -05.813, -05.907,
    -06.000, -06.091, -06.182, -06.271, -06.358, -06.444, -06.529, -06.612, -06.694, -06.775,
    -06.854, -06.932, -07.009, -07.084, -07.158, -07.231, -07.302, -07.373, -07.442, -07.510,
    -07.578, -07.644, -07.708, -07.772, -07.835, -07.897, -07.958, -08.018, -08.077, -08.135,
    -08.193, -08.249, -08.305, -08.360, -08.414, -08.467, -08.520, -08.572, -08.623, -08.674,
    -08.724, -08.773, -08.822, -08.870, -08.918, -08.965, -09.011, -09.058, -09.103, -09.149,
    -09.194, -09.238, -09.282, -09.326, -09.370, -09.413, -09.456, -09.499, -09.542, -09.584,
    -09.626, -09.668, -09.709, -09.751, -09.792, -09.833, -09.873, -09.914, -09.954, -09.994,
    -10.034, -10.073, -10.113, -10.152, -10.191, -10.230, -10.269, -10.307, -10.346, -10.384,
    -10.422, -10.460, -10.498, -10.535, -10.573, -10.610, -10.648, -10.685, -10.722, -10.759,
    -10.796, -10.832, -10.869, -10.905, -10.942, -10.978, -11.014, -11.051, -11.087, -11.123,
    -11.159, -11.195, -11.231, -11.267, -11.302, -11.338, -11.374, -11.410, -11.445, -11.481,
    -11.517, -11.552, -11.588, -11.623, -11.659, -11.694, -11.730, -11.765, -11.800, -11.836,
    -11.871, -11.906, -11.941, -11.976, -12.011, -12.047, -12.082, -12.117, -12.151, -12.186,
    -12.221, -12.256, -12.291, -12.325, -12.360, -12.395, -12.429, -12.464, -12.498, -12.533,
    -12.567, -12.601, -12.636, -12.670, -12.704, -12.738, -12.772, -12.807, -12.841, -12.875,
    -12.908, -12.942, -12.976, -13.010, -13.044, -13.077, -13.111, -13.144, -13.178, -13.211,
    -13.245, -13.278, -13.311, -13.344, -13.378, -13.411, -13.444, -13.476, -13.509, -13.542,
    -13.575, -13.607, -13.640, -13.673, -13.705, -13.737, -13.770, -13.802, -13.834, -13.866,
    -13.898, -13.930, -13.961, -13.993, -14.024, -14.056, -14.087, -14.119, -14.150, -14.181,
    -14.212, -14.243, -14.273, -14.304, -14.335, -14.365, -14.395, -14.426, -14.456, -14.486,
    -14.516, -14.546, -14.576, -14.605, -14.635, -14.665, -14.694, -14.724, -14.754, -14.783,
    -14.813, -14.842, -14.871, -14.901, -14.930, -14.960, -14.989, -15.018, -15.048, -15.077,
    -15.107, -15.136, -15.166, -15.195, -15.225, -15.255, -15.285, -15.314, -15.344, -15.373,
    -15.403, -15.432, -15.461, -15.490, -15.519, -15.547, -15.575, -15.603, -15.630, -15.657,
    -15.684, -15.710, -15.735, -15.760, -15.784, -15.808, -15.831, -15.853, -15.875, -15.896,
    -15.916, -15.935, -15.954, -15.971, -15.988, -16.003, -16.018, -16.031, -16.044, -16.055,
    -16.065, -16.074, -16.082, -16.089, -16.094, -16.098, -16.101, -16.102, -16.102, -16.100,
    -16.097, -16.092, -16.086, -16.078, -16.068, -16.057, -16.044, -16.029, -16.013, -15.995,
    -15.974, -15.952, -15.928, -15.902, -15.874, -15.844, -15.812, -15.778, -15.742, -15.705,
    -15.666, -15.626, -15.584, -15.541, -15.496, -15.451, -15.404, -15.357, -15.309, -15.260,
    -15.211, -15.161, -15.110, -15.059, -15.008, -14.957, -14.906, -14.855, -14.804, -14.753,
    -14.703, -14.653, -14.603, -14.554, -14.506, -14.459, -14.412, -14.367, -14.322, -14.278,
    -14.235, -14.192, -14.151, -14.110, -14.070, -14.031, -13.993, -13.955, -13.918, -13.882,
    -13.847, -13.813, -13.779, -13.746, -13.714, -13.682, -13.652, -13.622, -13.593, -13.564,
    -13.536, -13.509, -13.483, -13.458, -13.433, -13.409, -13.385, -13.363, -13.340, -13.319,
    -13.297, -13.276, -13.256, -13.236, -13.216, -13.196, -13.176, -13.156, -13.137, -13.117,
    -13.097, -13.078, -13.058, -13.037, -13.017, -12.996, -12.974, -12.953, -12.930, -12.907,
    -12.884, -12.860, -12.835, -12.809, -12.783, -12.755, -12.727, -12.698, -12.668, -12.637,
    -12.606, -12.573, -12.540, -12.506, -12.471, -12.435, -12.399, -12.362, -12.324, -12.285,
    -12.246, -12.205, -12.165, -12.123, -12.081, -12.038, -11.995, -11.951, -11.906, -11.860,
    -11.814, -11.768, -11.721, -11.673, -11.625, -11.576, -11.526, -11.477, -11.427, -11.377,
    -11.326, -11.276, -11.226, -11.176, -11.127, -11.078, -11.029, -10.981, -10.934, -10.887,
    -10.842, -10.797, -10.754, -10.711, -10.670, -10.631, -10.592, -10.556, -10.521, -10.488,
    -10.456, -10.427, -10.400, -10.375, -10.352, -10.331, -10.313, -10.297, -10.283, -10.270,
    -10.260, -10.251, -10.243, -10.237, -10.232, -10.229, -10.226, -10.224, -10.223, -10.222,
    -10.222, -10.222, -10.223, -10.223, -10.224, -10.224, -10.225, -10.224, -10.223, -10.222,
    -10.220, -10.217, -10.212, -10.207, -10.201, -10.193, -10.183, -10.173, -10.162, -10.150,
    -10.138, -10.125, -10.112, -10.099, -10.087, -10.075, -10.063, -10.053, -10.043, -10.035,
    -10.028, -10.022, -10.019, -10.017, -10.017, -10.020, -10.025, -10.033, -10.043, -10.057,
    -10.074, -10.094, -10.118, -10.146, -10.178, -10.214, -10.254, -10.297, -10.344, -10.394,
    -10.447, -10.502, -10.560, -10.619, -10.680, -10.743, -10.806, -10.871, -10.936, -11.001,
    -11.066, -11.131, -11.195, -11.259, -11.321, -11.382, -11.441, -11.498, -11.553, -11.605,
    -11.655, -11.701, -11.744, -11.783, -11.818, -11.850, -11.877, -11.900, -11.921, -11.938,
    -11.953, -11.966, -11.978, -11.988, -11.997, -12.005, -12.013, -12.021, -12.029, -12.038,
    -12.049, -12.061, -12.074, -12.091, -12.109, -12.131, -12.155, -12.182, -12.212, -12.244,
    -12.278, -12.314, -12.352, -12.392, -12.434, -12.476, -12.520, -12.565, -12.612, -12.658,
    -12.706, -12.754, -12.802, -12.850, -12.898, -12.947, -12.995, -13.042, -13.090, -13.137,
    -13.185, -13.232, -13.278, -13.325, -13.372, -13.418, -13.464, -13.510, -13.556, -13.602,
    -13.648, -13.693, -13.739, -13.784, -13.829, -13.874, -13.919, -13.964, -14.009, -14.054,
    -14.099, -14.145, -14.192, -14.238, -14.286, -14.334, -14.383, -14.432, -14.483, -14.534,
    -14.587, -14.640, -14.695, -14.751, -14.809, -14.868, -14.928, -14.990, -15.052, -15.115,
    -15.178, -15.241, -15.304, -15.367, -15.430, -15.491, -15.552, -15.612, -15.670, -15.727,
    -15.782, -15.835, -15.886, -15.934, -15.980, -16.022, -16.063, -16.100, -16.135, -16.168,
    -16.198, -16.227, -16.254, -16.279, -16.302, -16.324, -16.344, -16.364, -16.382, -16.400,
    -16.417, -16.433, -16.449, -16.465, -16.480,
];
