//! Letter transition frequencies measured from a large word corpus.
//!
//! Regenerate with `secrecy gen-model <corpus>`. The values must stay
//! bit-for-bit stable: the 0.5 reporting threshold in the surprisal scorer
//! was tuned against exactly this table.

/// Raw per-letter row before smoothing is applied.
pub(crate) struct RawLetter {
    /// The letter this row describes.
    pub(crate) letter: u8,
    /// Probability of the letter opening a token.
    pub(crate) at_start: f64,
    /// Probability of the letter following a digit.
    pub(crate) after_digit: f64,
    /// Probability of the letter following punctuation or a symbol.
    pub(crate) after_punct: f64,
    /// Probability of the letter following each lowercase letter, in `a..=z` order.
    pub(crate) after_letter: [f64; 26],
}

#[rustfmt::skip]
pub(crate) static LETTER_TABLE: [RawLetter; 52] = [
    RawLetter { letter: b'a', at_start: 5.1670e-2, after_digit: 8.3916e-3, after_punct: 5.0477e-2, after_letter: [8.3089e-3, 1.0205e-1, 1.8566e-1, 1.0117e-1, 2.8784e-2, 5.6009e-2, 4.9973e-2, 8.2230e-2, 2.4837e-2, 2.4482e-2, 1.5873e-2, 1.6755e-1, 1.0629e-1, 6.8962e-2, 2.7389e-2, 1.0664e-1, 3.3058e-2, 5.4054e-2, 9.0698e-3, 1.4048e-1, 7.3992e-3, 2.6058e-2, 2.5785e-2, 1.2658e-2, 1.1792e-3, 4.3409e-1] },
    RawLetter { letter: b'b', at_start: 8.1691e-3, after_digit: 5.5944e-3, after_punct: 1.9418e-2, after_letter: [2.2474e-2, 3.1435e-2, 2.4673e-4, 2.4457e-2, 5.2384e-3, 2.1269e-3, 2.1265e-3, 5.0690e-3, 2.8790e-2, 3.7665e-3, 5.1587e-2, 1.9225e-3, 5.4435e-2, 4.8225e-4, 2.4899e-3, 7.2913e-4, 1.2397e-2, 8.1653e-4, 5.5304e-4, 5.6790e-4, 6.1783e-2, 3.0656e-3, 3.7369e-4, 1.1507e-3, 8.2547e-3, 2.2727e-3] },
    RawLetter { letter: b'c', at_start: 4.6053e-2, after_digit: 1.9580e-3, after_punct: 4.8749e-2, after_letter: [5.5630e-2, 9.1116e-4, 1.7641e-2, 4.1806e-3, 4.9846e-2, 3.5448e-4, 1.3291e-3, 9.2368e-2, 9.1698e-2, 1.1299e-2, 6.9444e-3, 1.3310e-3, 1.1732e-3, 9.8380e-2, 1.1333e-2, 2.5520e-3, 1.2397e-2, 6.6139e-2, 2.5993e-2, 4.5219e-2, 1.6648e-2, 3.0656e-4, 1.4948e-3, 2.6122e-1, 5.8962e-4, 0.0000] },
    RawLetter { letter: b'd', at_start: 3.0532e-2, after_digit: 4.1958e-3, after_punct: 3.0423e-2, after_letter: [6.6234e-2, 4.5558e-4, 3.7010e-4, 6.2709e-3, 3.9585e-2, 1.0635e-3, 1.8607e-3, 2.2529e-3, 5.5088e-2, 1.8832e-3, 2.9762e-3, 1.8042e-2, 5.8658e-3, 6.4911e-2, 2.8419e-2, 6.0153e-3, 8.2645e-3, 2.7680e-2, 8.8486e-4, 7.0987e-4, 3.9031e-2, 1.2262e-3, 0.0000, 4.7181e-2, 5.8962e-4, 6.8182e-3] },
    RawLetter { letter: b'e', at_start: 4.8708e-2, after_digit: 3.6364e-3, after_punct: 3.5107e-2, after_letter: [1.0446e-2, 2.2733e-1, 1.8529e-1, 2.6777e-1, 3.2943e-3, 4.7146e-2, 2.1903e-1, 1.8389e-1, 6.4713e-2, 3.8418e-1, 2.0337e-1, 2.7551e-1, 2.6115e-1, 2.1605e-2, 4.2930e-4, 1.4692e-1, 2.4793e-2, 1.8062e-1, 2.1347e-1, 1.4020e-1, 2.7007e-2, 3.5254e-1, 3.8864e-2, 4.6030e-3, 5.2476e-2, 9.5455e-2] },
    RawLetter { letter: b'f', at_start: 2.6345e-2, after_digit: 1.4825e-2, after_punct: 3.6062e-2, after_letter: [4.4314e-3, 5.0114e-3, 2.0972e-3, 3.1355e-3, 2.4140e-2, 2.9068e-2, 3.8809e-2, 1.4081e-3, 6.1877e-3, 5.6497e-3, 1.9742e-1, 2.9577e-4, 1.4078e-3, 2.9128e-2, 1.3480e-2, 2.5520e-3, 1.2397e-2, 3.2661e-4, 4.4243e-4, 2.8395e-4, 3.6996e-3, 1.8394e-3, 3.7369e-4, 2.3015e-3, 1.7689e-3, 4.5455e-3] },
    RawLetter { letter: b'g', at_start: 1.2254e-3, after_digit: 1.1189e-3, after_punct: 1.4188e-2, after_letter: [5.0012e-2, 4.5558e-4, 1.4804e-3, 4.5987e-3, 7.8846e-3, 3.1904e-3, 1.0367e-2, 1.4081e-3, 3.3860e-2, 1.3183e-2, 1.3889e-2, 4.4366e-4, 5.3965e-3, 1.2693e-1, 1.5626e-2, 2.9165e-3, 8.2645e-3, 6.9650e-2, 7.7425e-4, 7.0987e-5, 2.4972e-2, 5.2115e-3, 1.8685e-3, 2.3015e-3, 2.9481e-3, 4.5455e-3] },
    RawLetter { letter: b'h', at_start: 2.5835e-2, after_digit: 4.7552e-3, after_punct: 2.0009e-2, after_letter: [6.3306e-4, 1.3667e-3, 1.7160e-1, 1.6722e-3, 3.2403e-4, 7.7987e-3, 1.4088e-2, 5.6322e-4, 2.5782e-4, 5.6497e-3, 2.9762e-3, 3.2535e-3, 1.0793e-2, 2.8935e-4, 1.0303e-3, 4.1378e-2, 8.2645e-3, 4.8992e-4, 3.4841e-2, 6.0552e-2, 0.0000, 8.2771e-3, 1.8685e-3, 1.1507e-3, 1.7689e-3, 8.4091e-2] },
    RawLetter { letter: b'i', at_start: 1.7461e-2, after_digit: 5.3147e-3, after_punct: 2.4193e-2, after_letter: [4.9537e-2, 1.8223e-2, 4.0711e-3, 1.7684e-1, 1.8902e-3, 2.1411e-1, 7.9745e-2, 1.3208e-1, 6.0158e-4, 9.4162e-3, 5.0595e-2, 8.5773e-2, 1.4993e-1, 2.2666e-2, 1.5712e-2, 5.9789e-2, 1.2397e-2, 1.0386e-1, 3.3072e-2, 1.5099e-1, 6.4928e-2, 3.1576e-1, 2.4327e-1, 2.7618e-2, 2.3585e-3, 3.6364e-2] },
    RawLetter { letter: b'j', at_start: 1.2254e-3, after_digit: 6.7133e-3, after_punct: 8.5039e-3, after_letter: [0.0000, 6.3781e-3, 3.7010e-4, 6.2709e-4, 1.0801e-4, 3.5448e-4, 2.6582e-4, 1.1264e-3, 4.2970e-4, 9.4162e-3, 9.9206e-4, 2.9577e-4, 7.0389e-4, 7.7160e-4, 1.5025e-2, 7.2913e-4, 8.2645e-3, 1.6331e-4, 2.2121e-4, 4.2592e-4, 5.5494e-4, 2.1459e-3, 7.4738e-4, 1.1507e-3, 2.3585e-3, 9.0909e-3] },
    RawLetter { letter: b'k', at_start: 1.1233e-3, after_digit: 4.7552e-3, after_punct: 5.9573e-3, after_letter: [3.1653e-4, 0.0000, 2.8868e-2, 4.1806e-4, 6.4805e-4, 7.0897e-4, 1.3291e-3, 5.6322e-4, 5.1564e-4, 1.6949e-2, 1.9841e-3, 1.3310e-3, 2.3463e-3, 2.2184e-3, 5.9243e-3, 3.4634e-3, 1.2397e-2, 3.8540e-2, 2.3228e-3, 0.0000, 0.0000, 9.1968e-4, 3.7369e-4, 4.6030e-3, 1.1792e-3, 6.8182e-3] },
    RawLetter { letter: b'l', at_start: 1.0211e-2, after_digit: 3.3566e-3, after_punct: 1.1096e-2, after_letter: [4.4473e-2, 1.9317e-1, 2.6770e-2, 6.5426e-2, 3.2403e-2, 3.3038e-1, 6.2467e-2, 2.5345e-3, 9.7370e-2, 1.1299e-2, 4.9603e-3, 2.7211e-2, 3.1441e-2, 1.6107e-2, 7.0233e-2, 5.0492e-2, 5.3719e-2, 5.1441e-3, 5.7516e-3, 3.1944e-3, 4.7170e-2, 1.8394e-3, 7.4738e-4, 1.0357e-2, 1.4151e-2, 4.5455e-3] },
    RawLetter { letter: b'm', at_start: 1.5828e-2, after_digit: 5.5944e-3, after_punct: 2.0873e-2, after_letter: [4.4235e-2, 7.2893e-3, 9.8692e-4, 9.8035e-2, 3.0999e-2, 1.4179e-3, 1.5683e-2, 1.1264e-2, 2.3634e-2, 1.5066e-2, 1.9841e-3, 3.2535e-3, 3.2614e-2, 1.8326e-3, 3.6233e-2, 5.6507e-3, 1.2397e-2, 7.4304e-3, 6.7470e-3, 8.2345e-3, 3.9216e-2, 3.0656e-4, 4.2227e-2, 6.0990e-2, 1.3738e-1, 2.2727e-3] },
    RawLetter { letter: b'n', at_start: 5.2078e-3, after_digit: 4.4755e-3, after_punct: 2.1146e-2, after_letter: [1.0192e-1, 5.0114e-2, 1.6038e-3, 2.9264e-3, 1.6039e-1, 1.4179e-3, 9.0377e-3, 5.6322e-3, 1.8374e-1, 5.6497e-3, 8.9286e-3, 1.4789e-4, 9.8545e-3, 1.0706e-2, 2.3654e-1, 8.0204e-3, 4.1322e-3, 2.5966e-2, 4.6455e-3, 1.7037e-3, 4.3840e-2, 3.0656e-4, 6.0164e-2, 2.3015e-3, 1.4741e-2, 4.5455e-3] },
    RawLetter { letter: b'o', at_start: 4.0335e-2, after_digit: 2.2378e-3, after_punct: 4.0246e-2, after_letter: [3.9566e-4, 7.0159e-2, 1.7839e-1, 4.3269e-2, 1.1449e-2, 1.2726e-1, 1.2228e-2, 6.0546e-2, 1.2264e-1, 2.6365e-2, 2.9762e-3, 8.7548e-2, 9.0568e-2, 3.2793e-2, 6.6970e-3, 4.2836e-2, 1.2397e-2, 1.2330e-1, 9.1251e-2, 3.1731e-2, 3.6996e-4, 1.8056e-1, 2.3318e-1, 3.4522e-3, 1.1792e-2, 3.6364e-2] },
    RawLetter { letter: b'p', at_start: 6.8518e-2, after_digit: 1.3147e-2, after_punct: 4.9568e-2, after_letter: [3.8696e-2, 2.2779e-3, 8.6356e-4, 2.2993e-3, 1.8740e-2, 2.8359e-3, 1.0633e-3, 2.5345e-3, 1.6672e-2, 1.6949e-2, 1.9841e-3, 1.3310e-3, 6.8278e-2, 1.7361e-3, 5.2889e-2, 2.6613e-2, 1.6529e-2, 8.1653e-4, 2.6767e-2, 3.4571e-2, 6.7333e-2, 4.9050e-3, 3.3632e-3, 3.4522e-2, 1.7335e-1, 9.0909e-3] },
    RawLetter { letter: b'q', at_start: 0.0000, after_digit: 3.6364e-3, after_punct: 5.4570e-4, after_letter: [1.1079e-3, 2.2779e-3, 2.4673e-4, 4.1806e-4, 3.0242e-3, 0.0000, 1.0633e-3, 8.4483e-4, 9.4534e-4, 0.0000, 1.9841e-3, 2.9577e-4, 5.3965e-3, 1.9290e-4, 3.4344e-4, 3.6456e-4, 2.4793e-2, 2.4496e-4, 1.6591e-3, 2.1296e-4, 5.5494e-4, 6.1312e-4, 1.4948e-3, 0.0000, 5.8962e-4, 6.8182e-3] },
    RawLetter { letter: b'r', at_start: 3.5127e-2, after_digit: 4.1958e-3, after_punct: 1.1596e-2, after_letter: [9.9628e-2, 3.1891e-2, 2.4426e-2, 4.1806e-3, 1.8064e-1, 6.0262e-2, 3.9341e-2, 6.7587e-3, 1.9337e-2, 7.5330e-3, 1.9841e-3, 1.4789e-4, 1.6424e-3, 1.9290e-4, 2.2564e-1, 2.4681e-1, 1.2397e-2, 9.9616e-3, 7.6319e-3, 5.7713e-2, 2.1587e-1, 4.5984e-3, 1.3079e-2, 4.6030e-3, 1.7689e-3, 6.8182e-3] },
    RawLetter { letter: b's', at_start: 1.2397e-1, after_digit: 3.3566e-3, after_punct: 7.4170e-2, after_letter: [1.1292e-1, 8.2005e-3, 9.2524e-3, 1.1497e-2, 9.0511e-2, 9.2166e-3, 7.1770e-2, 2.5345e-3, 3.6525e-2, 2.8625e-1, 6.6468e-2, 6.1372e-2, 3.0033e-2, 3.8291e-2, 1.9833e-2, 3.0077e-2, 8.2645e-3, 3.6580e-2, 3.6169e-2, 4.6852e-2, 1.3929e-1, 3.0656e-4, 4.1480e-2, 1.2658e-2, 4.4811e-2, 6.8182e-3] },
    RawLetter { letter: b't', at_start: 5.8103e-2, after_digit: 5.0350e-3, after_punct: 3.0059e-2, after_letter: [1.3302e-1, 2.2779e-3, 7.6733e-2, 4.8077e-3, 6.8586e-2, 7.0897e-3, 2.6582e-3, 1.2729e-1, 1.1636e-1, 1.8832e-3, 3.9683e-3, 6.9654e-2, 3.5195e-3, 2.4190e-1, 1.2965e-2, 7.6923e-2, 8.2645e-3, 4.1480e-2, 2.2995e-1, 3.9611e-2, 1.6371e-1, 3.9853e-3, 1.1211e-3, 1.5305e-1, 3.5377e-3, 2.2727e-3] },
    RawLetter { letter: b'u', at_start: 4.4828e-2, after_digit: 3.3566e-3, after_punct: 1.9372e-2, after_letter: [3.6876e-2, 1.1526e-1, 4.6755e-2, 4.3687e-2, 1.2961e-3, 2.8359e-3, 2.3126e-2, 3.5483e-2, 8.5940e-5, 7.5330e-3, 1.7857e-2, 4.5401e-2, 1.4547e-2, 6.8480e-3, 9.1955e-2, 3.1170e-2, 3.5537e-1, 4.4909e-3, 1.3494e-2, 1.5333e-2, 7.3992e-4, 9.1968e-4, 0.0000, 5.7537e-3, 1.1792e-3, 4.5455e-3] },
    RawLetter { letter: b'v', at_start: 3.8803e-3, after_digit: 1.1469e-2, after_punct: 7.9582e-3, after_letter: [5.6263e-2, 1.8223e-3, 7.4019e-4, 2.0903e-3, 4.2934e-2, 7.0897e-4, 2.9240e-3, 8.4483e-4, 2.9134e-2, 0.0000, 8.9286e-3, 5.1760e-3, 2.5809e-3, 5.6906e-3, 2.1465e-2, 2.0598e-2, 8.2645e-3, 3.4131e-2, 2.7652e-3, 2.8395e-4, 7.3992e-4, 0.0000, 3.7369e-4, 0.0000, 1.1792e-3, 4.5455e-3] },
    RawLetter { letter: b'w', at_start: 1.0007e-2, after_digit: 2.5175e-3, after_punct: 3.2242e-2, after_letter: [1.5035e-3, 3.1891e-3, 1.2337e-4, 6.2709e-4, 3.3213e-2, 7.0897e-4, 2.6582e-4, 2.8161e-4, 6.8752e-4, 1.1299e-2, 5.9524e-3, 2.9577e-4, 4.6926e-4, 2.4113e-3, 4.5591e-2, 2.0051e-3, 4.1322e-3, 8.9818e-4, 7.5655e-2, 3.5494e-4, 3.6996e-4, 6.1312e-4, 7.5112e-2, 6.9045e-3, 2.3585e-3, 4.5455e-3] },
    RawLetter { letter: b'x', at_start: 1.0211e-3, after_digit: 7.8322e-3, after_punct: 5.5480e-3, after_letter: [3.4027e-3, 4.5558e-4, 3.7010e-4, 6.2709e-4, 2.2358e-2, 6.7352e-3, 1.0633e-3, 0.0000, 1.5469e-3, 1.8832e-3, 2.9762e-3, 7.3943e-4, 1.1732e-3, 9.6451e-5, 5.6667e-3, 1.0937e-3, 1.2397e-2, 8.1653e-5, 2.2121e-4, 2.8395e-4, 1.1469e-2, 3.0656e-4, 1.1211e-3, 2.0713e-2, 2.3585e-3, 4.5455e-3] },
    RawLetter { letter: b'y', at_start: 0.0000, after_digit: 6.1538e-3, after_punct: 6.3665e-4, after_letter: [1.2028e-2, 1.6856e-2, 1.2337e-3, 3.9716e-3, 3.7803e-3, 3.1904e-3, 2.6582e-3, 5.6322e-4, 3.4376e-4, 3.7665e-3, 9.9206e-4, 4.1556e-2, 5.1619e-3, 2.2569e-2, 6.0101e-4, 1.8228e-3, 2.0661e-2, 3.3641e-2, 6.8576e-3, 2.9815e-2, 9.2490e-4, 1.2262e-3, 1.1211e-3, 1.9563e-2, 4.1274e-3, 1.3636e-2] },
    RawLetter { letter: b'z', at_start: 2.0423e-4, after_digit: 2.5175e-3, after_punct: 7.2760e-4, after_letter: [2.0575e-3, 4.5558e-4, 1.2337e-4, 4.1806e-4, 1.0801e-4, 1.4179e-3, 2.3923e-3, 5.3506e-3, 9.2815e-3, 3.7665e-3, 3.9683e-3, 1.4789e-4, 7.0389e-4, 5.7870e-4, 8.5859e-5, 0.0000, 1.2397e-2, 8.1653e-5, 3.3182e-4, 7.0987e-5, 5.3644e-3, 0.0000, 4.7085e-2, 3.4522e-3, 1.0613e-2, 6.8182e-3] },
    RawLetter { letter: b'A', at_start: 5.4120e-3, after_digit: 5.5944e-3, after_punct: 2.1146e-2, after_letter: [1.5827e-4, 1.8223e-3, 3.5776e-3, 4.8077e-3, 2.9702e-3, 0.0000, 8.2403e-3, 1.0138e-2, 0.0000, 0.0000, 9.9206e-4, 2.8098e-3, 2.5809e-3, 7.7160e-4, 1.3737e-3, 1.0937e-3, 8.2645e-3, 3.5111e-3, 1.8803e-3, 1.9876e-3, 0.0000, 0.0000, 1.1211e-3, 8.4005e-2, 1.1792e-3, 2.2727e-3] },
    RawLetter { letter: b'B', at_start: 1.1233e-3, after_digit: 8.9510e-3, after_punct: 1.2733e-3, after_letter: [7.9133e-5, 1.8223e-3, 2.4673e-4, 1.8813e-3, 2.1602e-4, 1.4179e-3, 7.9745e-4, 1.1264e-3, 4.2970e-4, 1.8832e-3, 3.9683e-3, 0.0000, 4.6926e-4, 1.6397e-3, 0.0000, 3.6456e-4, 4.1322e-3, 1.6331e-4, 9.9547e-4, 2.1296e-4, 0.0000, 0.0000, 7.4738e-4, 1.0357e-2, 1.0024e-2, 4.5455e-3] },
    RawLetter { letter: b'C', at_start: 1.9402e-3, after_digit: 2.5175e-3, after_punct: 7.1396e-3, after_letter: [3.1653e-4, 4.5558e-4, 1.2337e-4, 2.0903e-4, 1.7281e-3, 1.4179e-3, 5.3163e-4, 3.9426e-3, 4.2970e-4, 0.0000, 3.9683e-3, 2.8098e-3, 7.0389e-4, 3.8580e-4, 0.0000, 1.6405e-3, 4.1322e-3, 2.1230e-3, 7.7425e-4, 3.3364e-3, 5.5494e-4, 6.1312e-4, 1.1211e-3, 1.1507e-3, 1.7689e-3, 4.5455e-3] },
    RawLetter { letter: b'D', at_start: 7.7606e-3, after_digit: 2.7972e-3, after_punct: 1.2824e-2, after_letter: [1.3453e-3, 1.3667e-3, 2.4673e-4, 2.0903e-4, 2.1062e-3, 0.0000, 1.3291e-3, 2.8161e-4, 2.5782e-4, 1.8832e-3, 0.0000, 1.4789e-4, 2.3463e-4, 9.6451e-5, 2.5758e-4, 7.2913e-4, 0.0000, 1.4697e-2, 2.2121e-4, 1.2778e-3, 3.6996e-4, 3.0656e-4, 3.7369e-4, 0.0000, 2.3585e-3, 2.2727e-3] },
    RawLetter { letter: b'E', at_start: 7.8628e-3, after_digit: 6.4336e-3, after_punct: 1.7417e-2, after_letter: [7.9133e-5, 0.0000, 1.7271e-3, 4.8077e-3, 5.9405e-4, 3.5448e-3, 3.4556e-3, 2.8161e-4, 8.5940e-5, 1.8832e-3, 9.9206e-4, 1.4789e-4, 1.1732e-3, 5.2083e-3, 2.1465e-3, 0.0000, 4.1322e-3, 2.1230e-3, 1.8803e-3, 2.4846e-3, 0.0000, 6.1312e-4, 1.8685e-3, 2.3015e-3, 1.1792e-3, 2.2727e-3] },
    RawLetter { letter: b'F', at_start: 3.6761e-3, after_digit: 7.2727e-3, after_punct: 2.2738e-3, after_letter: [3.1653e-4, 0.0000, 0.0000, 4.1806e-4, 1.6741e-3, 1.0635e-3, 2.5518e-2, 0.0000, 0.0000, 1.8832e-3, 9.9206e-4, 5.9154e-4, 0.0000, 6.6551e-3, 2.3182e-3, 7.2913e-4, 4.1322e-3, 1.3881e-3, 1.8803e-3, 5.1821e-3, 3.6996e-4, 0.0000, 1.1211e-3, 2.3015e-3, 8.8443e-3, 4.5455e-3] },
    RawLetter { letter: b'G', at_start: 7.1480e-4, after_digit: 2.5175e-3, after_punct: 7.7308e-4, after_letter: [1.5827e-4, 1.3667e-3, 1.2337e-4, 4.1806e-4, 0.0000, 0.0000, 1.0633e-3, 0.0000, 1.7188e-4, 1.8832e-3, 9.9206e-4, 0.0000, 4.6926e-4, 9.6451e-5, 0.0000, 5.4685e-4, 0.0000, 2.4496e-4, 1.1061e-4, 7.0987e-5, 0.0000, 3.0656e-4, 7.4738e-4, 0.0000, 1.7689e-3, 4.5455e-3] },
    RawLetter { letter: b'H', at_start: 8.1691e-4, after_digit: 3.0769e-3, after_punct: 1.8190e-3, after_letter: [1.5827e-4, 4.5558e-4, 6.1683e-4, 2.0903e-4, 1.0801e-4, 1.0280e-2, 6.6454e-3, 7.0403e-3, 2.5782e-4, 3.7665e-3, 0.0000, 1.4789e-4, 0.0000, 5.0154e-3, 0.0000, 5.4685e-4, 8.2645e-3, 4.8992e-4, 4.6455e-3, 1.2778e-3, 1.8498e-4, 3.0656e-4, 0.0000, 0.0000, 1.7689e-3, 4.5455e-3] },
    RawLetter { letter: b'I', at_start: 8.1691e-4, after_digit: 2.5175e-3, after_punct: 2.0464e-3, after_letter: [7.9133e-5, 4.5558e-4, 3.7010e-4, 4.1806e-4, 1.9982e-3, 1.0635e-3, 4.2531e-3, 1.4081e-3, 2.5782e-4, 3.7665e-3, 0.0000, 0.0000, 9.3853e-4, 1.8326e-3, 1.7172e-4, 7.2913e-4, 8.2645e-3, 1.7147e-3, 6.6364e-4, 2.8395e-4, 7.3992e-4, 0.0000, 1.8685e-3, 1.1507e-3, 5.8962e-4, 0.0000] },
    RawLetter { letter: b'J', at_start: 5.1057e-4, after_digit: 1.6783e-3, after_punct: 6.8213e-4, after_letter: [7.9133e-5, 0.0000, 0.0000, 0.0000, 1.6201e-4, 3.5448e-4, 2.6582e-4, 5.6322e-4, 8.5940e-5, 0.0000, 1.9841e-3, 1.4789e-4, 0.0000, 2.8935e-4, 8.5859e-5, 1.8228e-4, 0.0000, 2.4496e-4, 2.2121e-4, 2.8395e-4, 1.8498e-4, 9.1968e-4, 7.4738e-4, 3.4522e-3, 1.7689e-3, 9.0909e-3] },
    RawLetter { letter: b'K', at_start: 0.0000, after_digit: 3.0769e-3, after_punct: 1.8190e-4, after_letter: [1.5827e-4, 0.0000, 0.0000, 2.0903e-4, 1.6201e-4, 0.0000, 0.0000, 0.0000, 8.5940e-5, 3.7665e-3, 9.9206e-4, 0.0000, 4.6926e-4, 9.6451e-5, 2.5758e-4, 1.8228e-4, 8.2645e-3, 4.8992e-4, 1.2167e-3, 1.4197e-4, 0.0000, 6.1312e-4, 3.7369e-4, 1.1507e-3, 5.8962e-4, 2.2727e-3] },
    RawLetter { letter: b'L', at_start: 8.1691e-4, after_digit: 2.2378e-3, after_punct: 3.3197e-3, after_letter: [2.3740e-4, 0.0000, 0.0000, 1.8813e-3, 8.6407e-4, 7.0897e-4, 5.3163e-4, 2.8161e-3, 2.4063e-3, 7.5330e-3, 1.9841e-3, 0.0000, 0.0000, 2.8935e-4, 3.4344e-4, 1.8228e-4, 0.0000, 1.7147e-3, 3.3182e-4, 4.2592e-4, 1.8498e-4, 6.1312e-4, 0.0000, 0.0000, 2.3585e-3, 2.2727e-3] },
    RawLetter { letter: b'M', at_start: 1.8380e-3, after_digit: 3.0769e-3, after_punct: 5.3661e-3, after_letter: [0.0000, 9.1116e-4, 1.2337e-4, 3.7625e-3, 1.6201e-4, 1.0635e-3, 2.6582e-4, 1.6897e-3, 8.5940e-5, 3.7665e-3, 2.9762e-3, 5.9154e-4, 2.3463e-4, 5.3048e-3, 6.0101e-4, 7.2913e-4, 0.0000, 4.3276e-3, 6.6364e-4, 2.1296e-4, 1.8498e-4, 6.1312e-4, 4.1106e-3, 3.4522e-3, 1.1792e-3, 0.0000] },
    RawLetter { letter: b'N', at_start: 5.1057e-4, after_digit: 2.5175e-3, after_punct: 1.8190e-3, after_letter: [3.1653e-4, 0.0000, 1.2337e-4, 1.6722e-3, 1.2961e-3, 3.5448e-4, 1.0633e-3, 2.8161e-4, 2.5782e-4, 0.0000, 9.9206e-4, 7.3943e-4, 4.9273e-3, 9.6451e-4, 0.0000, 1.8228e-4, 8.2645e-3, 3.2661e-4, 8.8486e-4, 3.5494e-4, 0.0000, 3.0656e-4, 0.0000, 1.1507e-3, 1.1792e-2, 9.0909e-3] },
    RawLetter { letter: b'O', at_start: 3.0634e-3, after_digit: 3.9161e-3, after_punct: 1.4097e-3, after_letter: [0.0000, 0.0000, 0.0000, 1.2542e-3, 1.0801e-3, 3.5448e-4, 0.0000, 1.1264e-3, 3.4376e-4, 0.0000, 9.9206e-4, 1.4789e-4, 1.8771e-3, 4.8225e-4, 1.7172e-4, 3.6456e-4, 8.2645e-3, 2.2863e-3, 1.1061e-4, 2.1296e-4, 1.8498e-4, 3.0656e-4, 1.4948e-3, 0.0000, 1.4741e-2, 4.5455e-3] },
    RawLetter { letter: b'P', at_start: 1.1233e-3, after_digit: 3.6364e-3, after_punct: 3.5471e-3, after_letter: [3.1653e-4, 0.0000, 1.2337e-4, 1.2542e-3, 6.4805e-3, 3.5448e-4, 1.8607e-3, 1.2109e-2, 1.2891e-3, 5.6497e-3, 5.9524e-3, 3.9929e-3, 7.0389e-3, 4.1474e-3, 3.4344e-4, 1.6405e-3, 0.0000, 4.7359e-3, 2.8758e-3, 1.8457e-3, 5.1794e-3, 3.0656e-4, 1.4948e-3, 2.3015e-3, 8.1958e-2, 0.0000] },
    RawLetter { letter: b'Q', at_start: 0.0000, after_digit: 2.5175e-3, after_punct: 9.0950e-4, after_letter: [0.0000, 9.1116e-4, 1.2337e-4, 8.3612e-4, 5.9405e-4, 0.0000, 1.5949e-3, 0.0000, 0.0000, 1.8832e-3, 0.0000, 4.4366e-4, 7.0389e-4, 0.0000, 4.2930e-4, 1.8228e-4, 4.1322e-3, 1.6331e-4, 1.1061e-4, 0.0000, 0.0000, 3.0656e-4, 7.4738e-4, 2.3015e-3, 1.1792e-3, 0.0000] },
    RawLetter { letter: b'R', at_start: 5.9532e-2, after_digit: 3.0769e-3, after_punct: 2.4557e-3, after_letter: [3.1653e-4, 9.1116e-4, 1.2337e-4, 6.2709e-3, 1.1881e-3, 3.1904e-3, 1.3291e-3, 4.2242e-3, 8.5940e-5, 1.8832e-3, 2.9762e-3, 2.0704e-3, 4.6926e-4, 1.9290e-4, 9.4445e-4, 1.8228e-4, 4.1322e-3, 5.2258e-3, 0.0000, 1.4907e-3, 5.5494e-4, 3.0656e-4, 7.4738e-4, 1.1507e-3, 5.8962e-4, 4.5455e-3] },
    RawLetter { letter: b'S', at_start: 9.3945e-3, after_digit: 4.4755e-3, after_punct: 1.3233e-2, after_letter: [1.1870e-3, 9.1116e-4, 1.2337e-4, 1.4632e-3, 7.0206e-3, 3.5448e-4, 2.1265e-3, 6.4770e-3, 8.5940e-5, 9.4162e-3, 4.9603e-3, 7.3943e-4, 1.8771e-3, 3.7616e-3, 9.4445e-4, 7.2913e-4, 1.2397e-2, 3.1028e-3, 1.6038e-2, 2.2006e-3, 3.6996e-4, 0.0000, 4.4843e-3, 1.1507e-2, 6.1321e-2, 2.2727e-3] },
    RawLetter { letter: b'T', at_start: 1.8380e-3, after_digit: 4.7552e-3, after_punct: 4.6385e-3, after_letter: [2.3740e-4, 1.1845e-2, 2.5907e-3, 2.7174e-3, 7.5606e-4, 1.0635e-3, 0.0000, 4.5058e-3, 0.0000, 3.7665e-3, 9.9206e-4, 2.2183e-3, 4.2234e-3, 1.3503e-3, 1.7172e-4, 0.0000, 0.0000, 3.1845e-3, 3.3182e-4, 4.9691e-4, 1.6648e-3, 9.1968e-4, 7.4738e-4, 0.0000, 1.1792e-3, 4.5455e-3] },
    RawLetter { letter: b'U', at_start: 6.1268e-4, after_digit: 3.3566e-3, after_punct: 1.5098e-2, after_letter: [1.5827e-4, 9.1116e-4, 1.2337e-4, 2.9264e-3, 1.0801e-4, 7.0897e-4, 1.3291e-3, 1.9713e-3, 1.7188e-4, 1.8832e-3, 0.0000, 1.1831e-3, 1.8771e-3, 1.4468e-3, 2.5758e-4, 2.3697e-3, 0.0000, 8.1653e-5, 1.8803e-3, 1.4197e-4, 0.0000, 6.1312e-4, 1.1211e-3, 0.0000, 1.1792e-3, 0.0000] },
    RawLetter { letter: b'V', at_start: 6.1268e-4, after_digit: 4.4755e-3, after_punct: 8.2765e-3, after_letter: [3.1653e-4, 1.8223e-3, 0.0000, 0.0000, 3.4563e-3, 1.4179e-3, 0.0000, 1.1264e-3, 8.5940e-5, 3.7665e-3, 1.9841e-3, 0.0000, 4.6926e-4, 1.7361e-3, 8.5859e-5, 1.8228e-4, 8.2645e-3, 6.5322e-4, 1.1061e-3, 3.5494e-4, 0.0000, 0.0000, 3.7369e-4, 3.4522e-3, 1.1792e-3, 4.5455e-3] },
    RawLetter { letter: b'W', at_start: 1.6338e-3, after_digit: 4.4755e-3, after_punct: 1.6371e-3, after_letter: [2.3740e-4, 4.5558e-4, 1.2337e-4, 0.0000, 1.0261e-3, 0.0000, 2.6582e-4, 5.6322e-4, 1.7188e-4, 9.4162e-3, 0.0000, 1.4789e-4, 4.6926e-4, 3.8580e-4, 8.5859e-5, 5.4685e-4, 4.1322e-3, 4.8992e-4, 0.0000, 2.1296e-4, 0.0000, 0.0000, 7.4738e-4, 3.4522e-3, 1.7689e-3, 2.2727e-3] },
    RawLetter { letter: b'X', at_start: 1.0211e-4, after_digit: 2.7972e-3, after_punct: 9.0950e-4, after_letter: [2.3740e-4, 1.8223e-3, 1.2337e-4, 6.2709e-4, 2.7002e-4, 0.0000, 0.0000, 2.8161e-4, 8.5940e-5, 5.6497e-3, 0.0000, 0.0000, 2.3463e-4, 2.8935e-4, 8.5859e-5, 0.0000, 8.2645e-3, 8.1653e-5, 2.2121e-4, 0.0000, 1.8498e-4, 3.0656e-4, 0.0000, 2.3015e-3, 1.7689e-3, 2.2727e-3] },
    RawLetter { letter: b'Y', at_start: 7.1480e-4, after_digit: 1.6783e-3, after_punct: 6.8213e-4, after_letter: [0.0000, 4.5558e-4, 4.9346e-4, 2.0903e-4, 1.6201e-4, 3.5448e-4, 0.0000, 5.6322e-4, 8.5940e-5, 0.0000, 0.0000, 1.4789e-4, 1.1732e-3, 2.8935e-4, 0.0000, 1.8228e-4, 0.0000, 0.0000, 0.0000, 1.4197e-4, 0.0000, 3.0656e-4, 0.0000, 1.1507e-3, 5.8962e-4, 0.0000] },
    RawLetter { letter: b'Z', at_start: 0.0000, after_digit: 3.9161e-3, after_punct: 1.3643e-4, after_letter: [1.5827e-4, 4.5558e-4, 1.2337e-4, 0.0000, 1.0801e-4, 0.0000, 1.0633e-3, 0.0000, 2.5782e-4, 1.8832e-3, 1.9841e-3, 2.9577e-4, 9.3853e-4, 1.9290e-4, 1.0303e-3, 3.6456e-4, 4.1322e-3, 0.0000, 2.2121e-4, 0.0000, 1.8498e-4, 6.1312e-4, 3.7369e-4, 1.1507e-3, 0.0000, 0.0000] },
];
