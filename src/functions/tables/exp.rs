//! Exponential tables, stored as f64 bit patterns.
//!
//! Regenerate with `fastmath tables exp-int` and `fastmath tables exp-frac`.

/// `e^i` for `i` in `[-710, 710]`, at offset `i + 710`. The last entry
/// overflows to infinity.
pub static EXP_INT: [u64; 1421] = [
    0x00033802fd28b3c3, 0x0008bfe55de02338, 0x0017c8ab2288c9ab, 0x003029ade2342558,
    0x0045f7b06b2c0fe5, 0x005ddb62d06b3019, 0x00744a3824e5285f, 0x008b93ad0d66defd,
    0x00a2bd8c17b493dc, 0x00b9788af0d610e6, 0x00d14f2b0fb9307f, 0x00e78694fe9f73cc,
    0x00fff989a16d0dbb, 0x0115baa6485e5782, 0x012d886cb184cae4, 0x014411d758400b4d,
    0x015b470cd81ca546, 0x017289797f3eb1af, 0x018931c4c86f15c5, 0x01a11f127f22eea9,
    0x01b745367beacec7, 0x01cfa0b112945ed6, 0x01e57e45c0c5b59d, 0x01fd365d1770a040,
    0x0213da1332f99ede, 0x022afb418cf3e80f, 0x024255f7978a67a0, 0x0258ebc347a39184,
    0x0270ef7f9293e5da, 0x0287048d9c2dcb01, 0x029f48cf6261d064, 0x02b5428cfd1c5f1e,
    0x02cce53181a80de5, 0x02e3a2ea01c991ee, 0x02fab048dc506ec0, 0x03122304ce8d412e,
    0x0328a6844c05657d, 0x0340c070d6b59ca4, 0x0356c49866b51c22, 0x036ef1e1e2dfe53b,
    0x0385077a2b3a069b, 0x039c94e7769839f2, 0x03b36c5a1621103f, 0x03ca66207d01de07,
    0x03e1f09f9699e8fa, 0x03f86205b914c66c, 0x041091e4dc3968c8, 0x04268554e847d59b,
    0x043e9be5ed8b2664, 0x0454cd0b7e05a5c6, 0x046c457c838ec18b, 0x04833661c61da1b7,
    0x049a1cc62c31e026, 0x04b1bec6665408bb, 0x04c81e45782fc195, 0x04e063da37cd3c33,
    0x04f646c133183202, 0x050e46d8e33d72f8, 0x0524933f2d676e53, 0x053bf6ee3ca69d34,
    0x055300ff6c7c2e28, 0x0569d437ad527eda, 0x05818d77b8a44ad7, 0x0597db417881efad,
    0x05b0364f82109118, 0x05c608db5eb484ad, 0x05ddf2b82c19897e, 0x05f45a13763ae1f1,
    0x060ba93a3cb53a35, 0x0622cc31688c252a, 0x06398c72ca0cae46, 0x06515cb20cac7d62,
    0x066798f7aef4551c, 0x06800943578974d3, 0x0695cba187f85526, 0x06ad9f813776ca1f,
    0x06c421869a4110e5, 0x06db5c5e2537c88e, 0x06f297f61e22c99d, 0x07094575522f0869,
    0x07212c73e5bbd5fc, 0x07375766161d6efa, 0x074fb968b133627c, 0x07658f11d0fda401,
    0x077d4d317bcd311c, 0x0793e996e012fee2, 0x07ab10579e40bcd8, 0x07c2644bf58ea085,
    0x07d8ff3d1b9cb882, 0x07f0fcbbcb435662, 0x0807168aae316c71, 0x081f614252e8284b,
    0x0835532a610e58a3, 0x084cfbc676a188e2, 0x0863b24293142dab, 0x087ac5245665858a,
    0x089231315b8b02c6, 0x08a8b9c8023c95f8, 0x08c0cd8848ca512e, 0x08d6d6637cf293e3,
    0x08ef0a10e423a904, 0x090517e96495d782, 0x091cab3dac71d32f, 0x09337b8803654d1b,
    0x094a7ac202ac7312, 0x0961fea4c133d172, 0x09787513e7e86e26, 0x09909ed7ede30e86,
    0x09a696ee8da1d378, 0x09beb3d1bc502a62, 0x09d4dd4d0d12c071, 0x09ec5b94a8a1e898,
    0x0a03456585d7102a, 0x0a1a312e5e7ad231, 0x0a31cca49bf94c40, 0x0a48311eb45c7ca5,
    0x0a6070a94e1f9059, 0x0a765829f0ef7c8f, 0x0a8e5e823a3b0994, 0x0aa4a3539108d490,
    0x0abc0cc8fd684df1, 0x0ad30fd973dd2691, 0x0ae9e8672b833817, 0x0b019b2f659409ca,
    0x0b17ede655271177, 0x0b3042fb010675d2, 0x0b461a13bcec2990, 0x0b5e0a1fc40034a2,
    0x0b7469fb2bf30362, 0x0b8bbed843bb3ef0, 0x0ba2dae22b815a8f, 0x0bb9a06a31b3ffad,
    0x0bd16a439bf9113a, 0x0be7ab68bd9864aa, 0x0c0015cba207fda9, 0x0c15dcaa0cf9cdc5,
    0x0c2db6a7c6f5dccd, 0x0c4431421e359ead, 0x0c5b71c01b3ded84, 0x0c72a67e0f56d28a,
    0x0c8959353f25f783, 0x0ca139dfc14e1511, 0x0cb769a3e6b296e5, 0x0ccfd233a0e64e00,
    0x0ce59feb01bceea9, 0x0cfd6417b798615d, 0x0d13f926ad10b4a7, 0x0d2b257e2a2df540,
    0x0d4272ab866d760e, 0x0d5912c6280b3fe7, 0x0d710a025bddce90, 0x0d872895cf19de71,
    0x0d9f79c85ed5e0ec, 0x0db563d4c10e0648, 0x0dcd126d11767245, 0x0de3c1a72292901e,
    0x0dfada101d510258, 0x0e123f68fc4575db, 0x0e28cd1ac69e588e, 0x0e40daa9f60c798e,
    0x0e56e83c7b04e02f, 0x0e6f2252cbb76a33, 0x0e85286575eb0e41, 0x0e9cc1a5571d69e9,
    0x0eb38ac1cd8a5e11, 0x0eca8f73a7e2ab8f, 0x0ee20cb4e0c2f693, 0x0ef88830fb115d59,
    0x0f10abd51e4c7042, 0x0f26a895f42d3418, 0x0f3ecbd03ce14dd8, 0x0f54ed9b506932ef,
    0x0f6c71be1205dd8d, 0x0f835475017af871, 0x0f9a45a683827ea0, 0x0fb1da8da821ddad,
    0x0fc84406ab7d71ae, 0x0fe07d826712e6b6, 0x0ff669a049c014b6, 0x100e763e0f12cd39,
    0x1024b37485a6ae4a, 0x103c22b4d28063bd, 0x10531ebf168dd58e, 0x1069fca670223e80,
    0x1081a8f1cae9c04f, 0x10980099c3d259de, 0x10b04fb066ccc58f, 0x10c62b59904f3938,
    0x10de2199a65f706a, 0x10f479ef4fbcca24, 0x110bd4872fa2901f, 0x1122e99e69861bd4,
    0x1139b47133f452f4, 0x115177dfc5e1f3b3, 0x1167bde835c64224, 0x1180225db7d3a3c5,
    0x1195edbfe1c1d991, 0x11adcde06e1aa8b3, 0x11c44109edb20931, 0x11db8732c7342422,
    0x11f2b5115bb3d972, 0x12096d049b5a68ff, 0x122147561a05beb0, 0x12377beff8c5b2b3,
    0x124feb11f0c5be05, 0x1265b0d15d45dc40, 0x127d7b0fd8c3abb6, 0x129408c2a36c769c,
    0x12ab3ab53d9c73eb, 0x12c2811652e75f7d, 0x12d9265e78d4438d, 0x12f117534c78ac15,
    0x13073aaf09e3b05d, 0x131f92619519a49b, 0x1335748c27412d46, 0x134d29255ff1867d,
    0x1363d117b9a41b90, 0x137aef0c3dcffefb, 0x13924dabb964c046, 0x13a8e07ca4eebbe2,
    0x13c0e7d5e67afd77, 0x13d6fa236bca0954, 0x13ef3aa7a8605559, 0x140538ee69433dd8,
    0x141cd81e843f67f6, 0x14339a077dd59a6e, 0x144aa435793e3bee, 0x14621acffdd7705b,
    0x14789b5cfe32f146, 0x1490b8dc755e3e18, 0x14a6ba4b26a9cd8a, 0x14bee3e17ddab2dd,
    0x14d4fdf651f6ac5a, 0x14ec87f8cd392224, 0x150363904234ef34, 0x151a5a2ea7bf96dd,
    0x1531e881934609fb, 0x154856fd6915a764, 0x15608a658a79f58b, 0x15767b24482bf236,
    0x158e8e0c7038478f, 0x15a4c3a215131439, 0x15bc38b1c947e18a, 0x15d32db05da054bb,
    0x15ea10f58783a1be, 0x1601b6bef106327d, 0x1618135bcfe6d2e6, 0x16305c6fbb2079c6,
    0x16463cace362200e, 0x165e3925e1829eda, 0x167489efeb4f052e, 0x168bea470d9f1a19,
    0x16a2f8662b934e56, 0x16b9c887dcff7642, 0x16d1858692b0a160, 0x16e7d07622c153bf,
    0x17002ef9a093e03c, 0x1715fee310b7abb4, 0x172de52b3b08d7c9, 0x174450de12522184,
    0x175b9cb63629a932, 0x1772c3b00c19d57a, 0x178980e372dc48ad, 0x17a154d6f815489c,
    0x17b78e4a577adcb4, 0x17d00201d7fb0db5, 0x17e5c1c4ede2b7e9, 0x17fd9219ed4b7068,
    0x1814186acca762e8, 0x182b4ffce5772c07, 0x18428f8c63c3ab07, 0x18593a0619e62b15,
    0x187124aea52f9ddc, 0x18874cd669940799, 0x189fab0e04adc91c, 0x18b585509dd58108,
    0x18cd3fef6fe84946, 0x18e3e09461af856e, 0x18fb0418c4a989d9, 0x19125bf99b97cbcc,
    0x1928f3eda8fb0088, 0x1940f50c221b0447, 0x19570c185a2895cc, 0x196f530f88ef2209,
    0x1985498448afd169, 0x199ceea94186e084, 0x19b3a9591d939844, 0x19cab9078362b189,
    0x19e228f6210807eb, 0x19f8ae97fcf99f91, 0x1a10c5edfb075673, 0x1a26cc0e2fdfdc75,
    0x1a3efc058de3e67a, 0x1a550e5e1bb09e26, 0x1a6c9e44e7c4c3cf, 0x1a8372b75137b3c5,
    0x1a9a6ec6d7b289dd, 0x1ab1f68065e4bcb1, 0x1ac86a02f8b1239c, 0x1ae09752c02d903d,
    0x1af68cb5f6dd5c08, 0x1b0ea5ed6c2a4d75, 0x1b24d3dc4927cbda, 0x1b3c4ebfef2238b1,
    0x1b533cad522dd473, 0x1b6a25547e0513f7, 0x1b81c496e050b08f, 0x1b98262c84d06cb5,
    0x1bb0693905c49814, 0x1bc64e0dc0b1829f, 0x1bde50c483c04dcd, 0x1bf499fd08681af2,
    0x1c0c0017eaef1aa2, 0x1c2307397aa8da7c, 0x1c39dcae3910bf72, 0x1c5193380ab510c9,
    0x1c67e3128fd5cd18, 0x1c803b9f63f62777, 0x1c961013a44a98a8, 0x1cadfc883bef20ce,
    0x1cc460be95b93b11, 0x1cdbb24a7537ee42, 0x1cf2d25a296fad56, 0x1d0994d1d1c4ef99,
    0x1d21626263b5908b, 0x1d37a0b30dfee42c, 0x1d500e8476d3d23e, 0x1d65d2c5bde5d77a,
    0x1d7da9360336fdce, 0x1d94281f324a0531, 0x1dab65552eb32927, 0x1dc29e0dc1d08325,
    0x1dd94dbd1738b12b, 0x1df132146e24a8f9, 0x1e075f0bf938a647, 0x1e1fc3cdbc9858c5,
    0x1e3596222f00a953, 0x1e4d56cb4f3b0e14, 0x1e63f01d2422dc00, 0x1e7b1935beaeadb3,
    0x1e926a52ab944b6c, 0x1ea9076dde99a035, 0x1ec1024cb0f7f9e9, 0x1ed71e1b510f90e2,
    0x1eef6b8a7c401be2, 0x1f055a271e4a125d, 0x1f1d05459cad9872, 0x1f33b8b6b6183219,
    0x1f4acde9d2fd7a56, 0x1f62372752f23cc1, 0x1f78c1e2031afd5f, 0x1f90d309b73ccae2,
    0x1fa6dddf1aa00aa3, 0x1fbf143c7bafe995, 0x1fd51ed2b794422f, 0x1fecb4a26f3c63f6,
    0x200381ea37bd35b3, 0x201a836f1fe58bbe, 0x2032048a2883850b, 0x20487d1765e4f251,
    0x2060a44a100cac19, 0x20769e556086eee2, 0x208ebde1117307d4, 0x20a4e4232bc64d77,
    0x20bc64df517d5120, 0x20d34bb5fd56a155, 0x20ea39c3600df153, 0x2101d279a1371c02,
    0x2118390bee040482, 0x2130760c4e8236f6, 0x21465f7c32d2440b, 0x215e68759b7a3fae,
    0x2174aa16b0ce0f41, 0x218c15f9d4db28fe, 0x21a316185fcdb131, 0x21b9f0e4546d1388,
    0x21d1a0f43645b77a, 0x21e7f5bd8858b612, 0x2200484f09adede8, 0x22162151a6f21c90,
    0x222e13f77f074ff1, 0x224470ab81923181, 0x225bc7ef9182a19b, 0x2272e10fbca33cb4,
    0x2289a8cfc4372b65, 0x22a16ff86525e12c, 0x22b7b32a2787541b, 0x22d01b10dc8b3b1d,
    0x22e5e3d3d7a9a1cd, 0x22fdc064289898e4, 0x231437dfdde45c6a, 0x232b7abe264f972d,
    0x2342ac9a75e2f3fa, 0x235961837ccceacd, 0x23713f84af802d9d, 0x2387714fc3e7f204,
    0x239fdca0cbeb1b9c, 0x23b5a700e5004888, 0x23cd6db90bd50085, 0x23e3ffb20a738c27,
    0x23fb2e6338ba7970, 0x241278b6f216c0ad, 0x24291afd51aa54f3, 0x24410f979b2393bd,
    0x2457302c5b769158, 0x246f8418913b2b95, 0x24856ad6f4332e86, 0x249d1bf3a3780ea3,
    0x24b3c82050be8c92, 0x24cae2dc74c5ec9d, 0x24e245639c3a49f7, 0x24f8d53b1c55c677,
    0x2510e02fb1f9e4ef, 0x2526efbdf1c3759b, 0x253f2c8655fd39e2, 0x25552f542fa6a0ce,
    0x256ccb11713e403a, 0x25839128ff069a6e, 0x259a98278cec9d6a, 0x25b2129ee3ae9b2d,
    0x25c8903abc4f2cb1, 0x25e0b14b81fc651f, 0x25f6b0028fe3a3b8, 0x260ed5e76ea7fc79,
    0x2624f476c6d7ca23, 0x263c7b0ffdd19182, 0x26535aca684229d8, 0x266a4e423a0f478c,
    0x2681e0673c2decbd, 0x26984bfa16ff6b94, 0x26b082e99d288282, 0x26c670f844618c78,
    0x26de8039371d7439, 0x26f4ba3cee4e8949, 0x270c2becd8b63e07, 0x27232502e40fd165,
    0x273a052a3b62ee2a, 0x2751aebb1dbf8f18, 0x2768087717a7f1bb, 0x278055089974acb1,
    0x2796329d232de199, 0x27ae2b7912964f75, 0x27c480a4df8f6e9c, 0x27dbdda59837b646,
    0x27f2efd0cea959aa, 0x2809bcdd565f45b5, 0x28217d9904abf72c, 0x2837c5afaf527a12,
    0x285027a710c54acd, 0x2865f4ef4590950a, 0x287dd7a46b8d85d6, 0x289447acd90de0a6,
    0x28ab9037d955ca2e, 0x28c2bb3288d6f0ad, 0x28d9755956ad4e9c, 0x28f14cff7170ec0d,
    0x290783a1d4c0faa7, 0x291ff58741c3a08d, 0x2935b7ecca1a01d7, 0x294d84b8b3ac2cdb,
    0x29640f531e1e6723, 0x297b43a13fb207f5, 0x2992872677e280eb, 0x29a92e9c0e16205f,
    0x29c11cece8b5d57f, 0x29d7424b845dc019, 0x29ef9cb9d6d3dffe, 0x2a057b93d4943e4d,
    0x2a1d32b363b58467, 0x2a33d795f6e91c26, 0x2a4af7df757d4eb7, 0x2a6253ab058b2b8a,
    0x2a78e8a35471e469, 0x2a90ed5ff3402afb, 0x2aa701aac02bb536, 0x2abf44e32b95dae1,
    0x2ad53fe28df496f2, 0x2aece191fb733ac4, 0x2b03a073b05c42e7, 0x2b1aacf02b65943f,
    0x2b3220be9ff8e556, 0x2b48a36d07970034, 0x2b60be571de802d5, 0x2b76c1bd8fb6d644,
    0x2b8eee00926a16fa, 0x2ba504d7244d31c8, 0x2bbc915201a1e776, 0x2bd369ea9c1f03d9,
    0x2bea62d11883dd7f, 0x2c01ee5fb9b0362f, 0x2c185ef70b496e3e, 0x2c308fd0f98cc130,
    0x2c4682820004cf81, 0x2c5e980f65223146, 0x2c74ca6fcabed982, 0x2c8c41f103ddbc48,
    0x2ca333f910844d90, 0x2cba197ffa4a691e, 0x2cd1bc8cc9861a79, 0x2ce81b3f492a453b,
    0x2d0061cc1b09e660, 0x2d1643f62385c65c, 0x2d2e430d04ec3068, 0x2d4490aab96af02f,
    0x2d5bf36c968f6c0e, 0x2d72fe9d687dda2e, 0x2d89d0fa94730b8e, 0x2da18b444a94063d,
    0x2db7d843b0a76d0d, 0x2dd034471b2bfc6c, 0x2de6061812054cfa, 0x2dfdeef6da3e109f,
    0x2e1457862d6588f1, 0x2e2ba5c254d94663, 0x2e42c9d6038f58d1, 0x2e59893eb0edbc2f,
    0x2e715a84bc2c099d, 0x2e87960236eb8104, 0x2ea0074096a5a34c, 0x2eb5c8e5e89b7f87,
    0x2ecd9bca54c1887c, 0x2ee41f0068a7a854, 0x2efb58efe08487fc, 0x2f1295a145c1bab3,
    0x2f29424a1fcf52e8, 0x2f412a4ca1cd1638, 0x2f575478d6cddee7, 0x2f6fb56e5c09773b,
    0x2f858c5dc99e4ae4, 0x2f9d4984eb4005e2, 0x2fb3e717b201aad5, 0x2fcb0cf2e1eeded3,
    0x2fe261fd9796a399, 0x2ff8fc1ab74075b7, 0x3010fa9a8317651f, 0x302713a590c2e245,
    0x303f5d530b4f5edd, 0x3055507ddc92dc42, 0x306cf8241b8ee293, 0x3083afca550dd136,
    0x309ac1c907f821be, 0x30b22ee965fbfd1b, 0x30c8b6ae536cb5af, 0x30e0cb6cebc0fd13,
    0x30f6d3866acc4b97, 0x310f062c8b65b198, 0x312515444e1f3930, 0x313ca7a56a7bcfc8,
    0x31537916a222f236, 0x316a777007f03ac8, 0x3181fc63223fac81, 0x31987202d671dae5,
    0x31b09cc26b8a5898, 0x31c694197069d2bb, 0x31deaff8340c0b95, 0x31f4daaf4ffbffb3,
    0x320c580663b97826, 0x322342faee475139, 0x323a2de59d8543cc, 0x3251ca6942036abb,
    0x32682e16284f5ec5, 0x32806e9996332ba1, 0x3296555cb289e44b, 0x32ae5ab364643354,
    0x32c4a0bd18e64df7, 0x32dc094499cc578e, 0x32f30d759323998c, 0x3309e5278ab1d4cf,
    0x332198fa3f30be25, 0x3337eae636d6144e, 0x335040f1036f4863, 0x3366174e477a895f,
    0x337e065b82dd95a0, 0x3394676be491d129, 0x33abbb5da5f7c823, 0x33c2d884eef5fdcb,
    0x33d99d3397ab8371, 0x33f1681497ed15b3, 0x3407a870f597fdbd, 0x342013c74edba307,
    0x3435d9ec4ada7938, 0x344db2edfd20fa7c, 0x34642eb9f39afb0b, 0x347b6e4f282b43f4,
    0x3492a42764857b19, 0x34a9560792d19314, 0x34c137b6ce8e052c, 0x34d766b45dd84f18,
    0x34efce362fe6e7d0, 0x35059d34dd8a5473, 0x351d606847fc727a, 0x3533f6a58b795de3,
    0x354b2216c6efdac1, 0x3562705b5b153fb8, 0x35790fa1509bd50d, 0x359107df698da211,
    0x35a725ae6e7b9d35, 0x35bf75d6040aeff6, 0x35d56126259e093c, 0x35ed0ec7df4f7bd4,
    0x3603bf2cf6722e46, 0x361ad6b22f55db42, 0x36323d1f3e5834a0, 0x3648c9feab89b876,
    0x3660d88cf37f00dd, 0x3676e55d2bf838a7, 0x368f1e6b68529e33, 0x36a525be4e4e601d,
    0x36bcbe0a45f75eb1, 0x36d3884e838aea68, 0x36ea8c1f14e2af5d, 0x37020a717e64a9bd,
    0x3718851d84118908, 0x3730a9bdfb02d240, 0x3746a5bea046b42e, 0x375ec7f3b269efa8,
    0x3774eafb87eab0f2, 0x378c6e2d05bbc000, 0x37a35208867c2683, 0x37ba425b317eeacd,
    0x37d1d8508fa8246a, 0x37e840fbc08fdc8a, 0x38007b7112bc1ffe, 0x381666d0dad2961d,
    0x382e726c3f64d0fe, 0x3844b0dc07cabf98, 0x385c1f2daf3b6a46, 0x38731c5957a47de2,
    0x3889f96445648b9f, 0x38a1a6baeadb4fd1, 0x38b7fd974d372e45, 0x38d04da4d1452919,
    0x38e62891f06b3450, 0x38fe1dd273aa8a4a, 0x3914775e0840bfdd, 0x392bd109d9d94bda,
    0x3942e73f53fba844, 0x3959b138170d6bfe, 0x397175af0cf60ec5, 0x3987baee1bffa80b,
    0x39a02057d1245ceb, 0x39b5eafffb34ba31, 0x39cdca23bae16424, 0x39e43e7fc88b8056,
    0x39fb83bf23a9a9eb, 0x3a12b2b8dd05b318, 0x3a2969d47321e4cc, 0x3a41452b7723aed2,
    0x3a5778fe2497184c, 0x3a6fe7116182e9cc, 0x3a85ae191a99585a, 0x3a9d775d87da854d,
    0x3ab4063f8cc8bb98, 0x3acb374b315f87c1, 0x3ae27ec458c65e3c, 0x3af923372c67a074,
    0x3b11152eaeb73c08, 0x3b2737c5645114b5, 0x3b3f8e6c24b5592e, 0x3b5571db733a9d61,
    0x3b6d257d547e083f, 0x3b83ce9b9de78f85, 0x3b9aebabae3a41b5, 0x3bb24b6031b49bda,
    0x3bc8dd5e1bb09d7e, 0x3be0e5b73d1ff53d, 0x3bf6f741de1748ec, 0x3c0f36bd37f42f3e,
    0x3c2536452ee2f75c, 0x3c3cd480a1b74820, 0x3c539792499b1a24, 0x3c6aa0de4bf35b38,
    0x3c82188ad6ae3303, 0x3c9898471fca6055, 0x3cb0b6c3afdde064, 0x3cc6b7719a59f0e0,
    0x3cdee001eed62aa0, 0x3cf4fb547c775da8, 0x3d0c8464f7616468, 0x3d236121e24d3bba,
    0x3d3a56e0c2ac7f75, 0x3d51e642baeb84a0, 0x3d6853f01d6d53ba, 0x3d80885298767e9a,
    0x3d967852a7007e42, 0x3dae8a37a45fc32e, 0x3dc4c1078fe9228a, 0x3ddc3527e433fab1,
    0x3df32b48bf117da2, 0x3e0a0db0d0ddb3ec, 0x3e21b48655f37267, 0x3e381056ff2c5772,
    0x3e505a628c699fa1, 0x3e6639e3175a689d, 0x3e7e355bbaee85cb, 0x3e94875ca227ec38,
    0x3eabe6c6fdb01612, 0x3ec2f6053b981d98, 0x3ed9c54c3b43bc8b, 0x3ef18354238f6764,
    0x3f07cd79b5647c9b, 0x3f202cf22526545a, 0x3f35fc21041027ad, 0x3f4de16b9c24a98f,
    0x3f644e51f113d4d6, 0x3f7b993fe00d5376, 0x3f92c155b8213cf4, 0x3fa97db0ccceb0af,
    0x3fc152aaa3bf81cc, 0x3fd78b56362cef38, 0x3ff0000000000000, 0x4005bf0a8b145769,
    0x401d8e64b8d4ddae, 0x403415e5bf6fb106, 0x404b4c902e273a58, 0x40628d389970338f,
    0x407936dc5690c08f, 0x409122885aaeddaa, 0x40a749ea7d470c6e, 0x40bfa7157c470f82,
    0x40d5829dcf950560, 0x40ed3c4488ee4f7f, 0x4103de1654d37c9a, 0x411b00b5916ac955,
    0x413259ac48bf05d7, 0x4148f0ccafad2a87, 0x4160f2ebd0a80020, 0x417709348c0ea4f9,
    0x418f4f22091940bd, 0x41a546d8f9ed26e1, 0x41bceb088b68e804, 0x41d3a6e1fd9eecfd,
    0x41eab5adb9c43600, 0x420226af33b1fdc1, 0x4218ab7fb5475fb7, 0x4230c3d3920962c9,
    0x4246c932696a6b5d, 0x425ef822f7f6731d, 0x42750bba3796379a, 0x428c9aae4631c056,
    0x42a370470aec28ed, 0x42ba6b765d8cdf6d, 0x42d1f43fcc4b662c, 0x42e866f34a725782,
    0x4300953e2f3a1ef7, 0x431689e221bc8d5b, 0x432ea215a1d20d76, 0x4344d13fbb1a001a,
    0x435c4b334617cc67, 0x43733a43d282a519, 0x438a220d397972eb, 0x43a1c25c88df6862,
    0x43b8232558201159, 0x43d0672a3c9eb871, 0x43e64b41c6d37832, 0x43fe4cf766fe49be,
    0x44149767bc0483e3, 0x442bfc951eb8bb76, 0x444304d6aeca254b, 0x4459d97010884251,
    0x44719103e4080b45, 0x4487e013cd114461, 0x44a03996528e074c, 0x44b60d4f6fdac731,
    0x44cdf8c5af17ba3b, 0x44e45e3076d61699, 0x44fbaed16a6e0da7, 0x4512cffdfebde1a1,
    0x4529919cabefcb69, 0x454160345c9953e3, 0x45579dbc9dc53c66, 0x45700c810d464097,
    0x4585d009394c5c27, 0x459da57de8f107a8, 0x45b425982cf597cd, 0x45cb61e5ca3a5e31,
    0x45e29bb825dfcf87, 0x45f94a90db0d6fe2, 0x46112fec759586fd, 0x46275c1dc469e3af,
    0x463fbfd219c43b04, 0x4655936d44e1a146, 0x466d531d8a7ee79c, 0x4683ed9d24a2d51b,
    0x469b15cfe5b6e17b, 0x46b268038c2c0e00, 0x46c9044a73545d48, 0x46e1002ab6218b38,
    0x46f71b3540cbf921, 0x470f6799ea9c414a, 0x47255779b984f3eb, 0x473d01a210c44aa4,
    0x4753b63da8e91210, 0x476aca8d6b0116b8, 0x478234de9e0c74e9, 0x4798bec7503ca477,
    0x47b0d0eda9796b90, 0x47c6db0118477245, 0x47df1056dc7bf22d, 0x47f51c2cc3433801,
    0x480cb108ffbec164, 0x48237f780991b584, 0x483a801c0ea8ac4d, 0x48520247cc4c46c1,
    0x48687a0553328015, 0x4880a233dee4f9bb, 0x48969b7f55b808ba, 0x48aeba064644060a,
    0x48c4e184933d9364, 0x48dc614fe2531841, 0x48f3494a9b171bf5, 0x490a36798b9d969b,
    0x4921d03d8c0c04af, 0x493836026385c974, 0x495073fbe9ac901d, 0x49665cae0969f286,
    0x497e64a58639cae8, 0x4994a77f5f9b50f9, 0x49ac12744a3a28e3, 0x49c313b3b6978e85,
    0x49d9eda3a31e587e, 0x49f19ebe56b56453, 0x4a07f2bc6e599b7e, 0x4a204644610df2ff,
    0x4a361e8b490ac4e6, 0x4a4e103201f299b3, 0x4a646e1b637beaf5, 0x4a7bc473cfede104,
    0x4a92deb1b9c85e2d, 0x4aa9a5981ca67d10, 0x4ac16dc8a9ef670b, 0x4ad7b03166942309,
    0x4af0190be03150a7, 0x4b05e1152f9a8119, 0x4b1dbca9263f8487, 0x4b343556dee93bee,
    0x4b4b774c12967dfa, 0x4b62aa4306e922c2, 0x4b795e54c5dd4217, 0x4b913d5b07929253,
    0x4ba76e5f44ce9c2f, 0x4bbfd8a20c3cc006, 0x4bd5a449dd5ccab9, 0x4bed6a0867193d6c,
    0x4c03fd3016c9d64c, 0x4c1b2afab7f7fc66, 0x4c32766604b71d6d, 0x4c4917d7728472a7,
    0x4c610d73f59d48df, 0x4c772d4407457c1d, 0x4c8f8024eb633b1d, 0x4ca5682777ca4725,
    0x4cbd184d3f8c34f5, 0x4cd3c5a554d381af, 0x4ceadf7d6c5fbb7a, 0x4d0243191e60be32,
    0x4d18d21dfc67715a, 0x4d30de11fe284410, 0x4d46ecddb1c8c6e7, 0x4d5f289dab234c40,
    0x4d752cac29822593, 0x4d8cc77531a4f011, 0x4da38eb4e77ddddd, 0x4dba94d1e2925340,
    0x4dd2105ac3794c20, 0x4de88d26434a71b6, 0x4e00af33af5b2d7a, 0x4e16ad2a4dac90e3,
    0x4e2ed209a0495e91, 0x4e44f1d6223bcf5a, 0x4e5c777dc65c9488, 0x4e73585d21f52ad4,
    0x4e8a4af5d3b99d59, 0x4ea1de2967ecafcc, 0x4eb848ee2cd9e02a, 0x4ed080d79b61580f,
    0x4ee66e27e9b9ab09, 0x4efe7c66270c39f4, 0x4f14b7a396b8bff6, 0x4f2c28648d85ab83,
    0x4f43229c5c0d358f, 0x4f5a01e6ff52efb1, 0x4f71ac8383f35fbd, 0x4f880573a499f824,
    0x4fa052fc585e98a2, 0x4fb62fd49a1e79f8, 0x4fce27b0a2f86833, 0x4fe47e12c0b6846f,
    0x4ffbda271db91986, 0x5012ed70f2346931, 0x5029b9a32b1d8885, 0x50417b6794066e66,
    0x5057c2b49bd687ca, 0x507025a080643d67, 0x5085f22e785ff70e, 0x509dd3e67edbd369,
    0x50b44521dee0e199, 0x50cb8cc314434b52, 0x50e2b8d945670408, 0x50f9722823092b4d,
    0x51114ad418d3b94c, 0x512780af0992e0c5, 0x513ff18562cc483e, 0x5155b533a34adb32,
    0x516d81052cb19d0c, 0x51840ccf34c420de, 0x519b40361511970e, 0x51b284d3bb227032,
    0x51c92b73b924edf1, 0x51e11ac797323903, 0x51f73f60ea79f5b9, 0x520f98c31a5fdd25,
    0x522578e23ee4f2d2, 0x523d2f0a258e2d01, 0x5253d5190abf8313, 0x526af47dca9fd133,
    0x5282515ebd58bf5c, 0x5298e583c58e35c4, 0x52b0eb40981671ac, 0x52c6fec840cea3d5,
    0x52df40f772b4aa1b, 0x52f53d38745e9aa6, 0x530cddf2e98b780d, 0x53239dfdadf7d8f2,
    0x533aa997e5e614a7, 0x53521e78ba644953, 0x5368a056265fe3ce, 0x5380bc3da8870386,
    0x5396bee3145c2812, 0x53aeea1fbe812d0f, 0x53c50234720464c9, 0x53dc8dbcffb57d24,
    0x53f3677b704a40d8, 0x540a5f821e46bd6c, 0x5421ec2024fb6cef, 0x54385be8bfa1afce,
    0x54508dbd59915b4f, 0x54667faf7266bf9b, 0x547e943957ec0c43, 0x5494c7d46b30e5b0,
    0x54ac3e65f5f6f8e0, 0x54c33190a83f0958, 0x54da163a317c9571, 0x54f1ba5374247313,
    0x550818397b37b180, 0x55205fbe403e820d, 0x5536412b6d9c72f9, 0x554e3f41a0776b59,
    0x55648e16983ea89a, 0x557befeb61064ea1, 0x5592fc3bb0fcb841, 0x55a9cdbde38932e0,
    0x55c189112329934d, 0x55d7d54648d217a1, 0x55f0323ef5880bf3, 0x560603551e060b72,
    0x561deb3600ec79d4, 0x563454f9367a4b04, 0x564ba24adc52a6b6, 0x5662c77aea3b35ac,
    0x5679860afea3876d, 0x56915857b18d19c4, 0x56a7930d1ddd0c34, 0x56c0053e164d25ff,
    0x56d5c62aa0f8323a, 0x56ed9813e9473a60, 0x57041c7a8814beba, 0x571b558209f140fd,
    0x5732934cb8371ab4, 0x57493f1f5326a019, 0x57612825a2fdae13, 0x5777518bf570c588,
    0x578fb174868f8418, 0x57a589aa1904b8fd, 0x57bd45d8d0a28247, 0x57d3e498d415b213,
    0x57eb098e928afb64, 0x58025faf83a52372, 0x5818f8f8b78094e9, 0x5830f8797f4abab9,
    0x584710c0d041c387, 0x585f59644203c1de, 0x58754dd1adec0b48, 0x588cf48235243089,
    0x58a3ad52664e1df7, 0x58babe6e254a0bca, 0x58d22ca1b9a5c3df, 0x58e8b3950821a800,
    0x5900c951d258f4bf, 0x5916d0a9b49138cb, 0x592f0248af95f4c5, 0x5945129f8c8ec869,
    0x595ca40d9be99bd8, 0x597376a58f4af93b, 0x598a741e77c7ec9d, 0x59a1fa21cbb8df30,
    0x59b86ef2276b93a5, 0x59d09aad2c170340, 0x59e69144ae1d9f07, 0x59feac1f275b04af,
    0x5a14d811e6df8552, 0x5a2c547890f4370c, 0x5a434090a44810f8, 0x5a5a2a9d45fb7bb3,
    0x5a71c82e2fb1a15b, 0x5a882b0dfda106aa, 0x5aa06c8a20724675, 0x5ab6528fce13764b,
    0x5ace56e508c916d8, 0x5ae49e26f3d4b60a, 0x5afc05c0a7166b4a, 0x5b130b11ff23056a,
    0x5b29e1e852274adb, 0x5b4196c55faa7a5c, 0x5b57e7e678d54eb5, 0x5b703ee7474bbdf2,
    0x5b8614892afe2ea5, 0x5b9e0297baa30c57, 0x5bb464dcef5abe49, 0x5bcbb7e377e0a776,
    0x5be2d627fe4e6af9, 0x5bf999fd64c82181, 0x5c1165e5d9f93ade, 0x5c27a5798cdc2ff0,
    0x5c4011c33c6d0db8, 0x5c55d72ee0b93bb4, 0x5c6daf34aae43996, 0x5c842c321a4628c7,
    0x5c9b6adea38ea430, 0x5cb2a1d104c50f06, 0x5cc952da4c83af00, 0x5ce1358e212351ef,
    0x5cf763c53339e998, 0x5d0fca393efb439c, 0x5d259a7f106151ac, 0x5d3d5cb94eac5631,
    0x5d53f424ba4604df, 0x5d6b1eafd0f4dbee, 0x5d826e0b79fd6017, 0x5d990c7cde176cfa,
    0x5db105bcbbd22b5d, 0x5dc722c76b1366fe, 0x5ddf71e427efe008, 0x5df55e77e045cb62,
    0x5e0d0b23222ba489, 0x5e23bcb319d66a0e, 0x5e3ad354ad6e368f, 0x5e523ad5c9dcf903,
    0x5e68c6e2f447b147, 0x5e80d67034c7ae68, 0x5e96e27e391e9c6c, 0x5eaf1a84823daf20,
    0x5ec523177bda38ec, 0x5edcba6fa88f5082, 0x5ef385db883320ee, 0x5f0a88caecc9e7db,
    0x5f22082e64ac4eb5, 0x5f38820a6fceeeed, 0x5f50a7a71ad2dc6d, 0x5f66a2e7a7930f81,
    0x5f7ec417a3e63c6a, 0x5f94e85c13a81660, 0x5fac6a9c6bee04c8, 0x5fc34f9c594a7140,
    0x5fda3f1049398066, 0x5ff1d613bf0a8036, 0x60083df1374d259d, 0x6020796000c48f27,
    0x60366401c61a8a8a, 0x604e6e9aea52153a, 0x6064ae43dd40aa42, 0x607c1ba6fd34b612,
    0x609319f3e5b014a7, 0x60a9f622833f3047, 0x60c1a48451e14885, 0x60d7fa9537377f3c,
    0x60f04b997d645645, 0x610625caa9c1fa57, 0x611e1a0bba3c3728, 0x613474cd132f0b40,
    0x614bcd8cf413a3b1, 0x6162e4e08a904d9a, 0x6179adff619c3b18, 0x6191737e9a5911fe,
    0x61a7b7f461c81aee, 0x61c01e522b6573e7, 0x61d5e8406cea7625, 0x61edc6677f9db7b8,
    0x62043bf5f4ea4cbb, 0x621b804beeeb8cfa, 0x6232b060a9a32244, 0x624966a4b13f9cbc,
    0x6261430119cd2adb, 0x6277760caeee052e, 0x628fe31152b7ef6b, 0x62a5ab612f3a7119,
    0x62bd73abad99a482, 0x62d403bcc6c7d1bc, 0x62eb33e192bb1ade, 0x63027c72a91fbad6,
    0x631920104534de5e, 0x6331130a55c01a76, 0x634734dc1c3d5c6c, 0x635f8a773363f085,
    0x63756f2b158f14e4, 0x638d21d5be691b49, 0x63a3cc1fd1edc5f0, 0x63bae84b8b0c7d2a,
    0x63d24914f3afe2f6, 0x63e8da3ff6931b1b, 0x6400e398d7d01704, 0x6416f460acdfa1c0,
    0x642f32d34539d4b2, 0x6445339c49edc516, 0x645cd0e33347995c, 0x6473951d6445bc31,
    0x648a9d8789e33adb, 0x64a21645f863ade5, 0x64b89531a46c33ed, 0x64d0b4ab2dab9b53,
    0x64e6b4986984352d, 0x64fedc22dc262bd7, 0x6514f8b2fb75cab5, 0x652c80d1945f81b6,
    0x65435eb3d06f7247, 0x655a539347aa34fd, 0x6571e4042aa53cfd, 0x658850e333bc3230,
    0x65a0863fe9061c49, 0x65b675816050fd04, 0x65ce86635382509d, 0x65e4be6d5e5227a4,
    0x65fc319e70b6d934, 0x661328e16db3b964, 0x662a0a6c8321db88, 0x6641b24e022ca821,
    0x66580d528f58d861, 0x667058559f8cddbd, 0x66863719a4d337e8, 0x669e31920dffc6d5,
    0x66b484c9abab9169, 0x66cbe3475e1c3855, 0x66e2f3a497f7830c, 0x66f9c211014e93a7,
    0x67118121faf407d4, 0x6727ca7da7e1607c, 0x67402aeaeadbe65c, 0x6755f95f4ff07902,
    0x676dddac7593d338, 0x67844bc6219a92ef, 0x679b95c9f913f1f2, 0x67b2befbafaf11f3,
    0x67c97a7e8d674eee, 0x67e1507e952ba07a, 0x67f7886273ae678c, 0x680ffbfcd0e62482,
    0x6825bc507fd7cdef, 0x683d8aaffb634bd5, 0x685413610319d4cc, 0x686b4923e4c56e4a,
    0x68828ae519d14e71, 0x689933b2f8c452ec, 0x68b12062552e2e87, 0x68c746feeec205e9,
    0x68dfa31d735687c6, 0x68f57feb57f30dea, 0x690d389a17aea099, 0x6923db9897f88ba3,
    0x693afd52cae8b9e7, 0x6952575f3fcb3e2d, 0x6968edac1ace3095, 0x6980f0cbc375532d,
    0x699706511ab813a2, 0x69af4b350757662a, 0x69c5442e00d851d5, 0x69dce76849be1b4f,
    0x69f3a46b2ccd0c40, 0x6a0ab2545bb447c1, 0x6a2224688f739e9b, 0x6a38a867d0eceb08,
    0x6a50c1b96c8e2131, 0x6a66c656feb698a8, 0x6a7ef440debeb36b, 0x6a950916a83b9497,
    0x6aac971817ce5687, 0x6ac36dd712e784fd, 0x6ada68264dcae606, 0x6af1f1ff7afea1ec,
    0x6b0863e3fe774d18, 0x6b209329e10dc999, 0x6b36870ea75e682d, 0x6b4e9e3e52d4fb85,
    0x6b64cea380e07b71, 0x6b7c47a70efceaba, 0x6b9337daa044dc04, 0x6baa1ec65e29e512,
    0x6bc1c02278f1ce0f, 0x6bd8201e8ca26d36, 0x6bf0651bb58667c7, 0x6c06487626bbe6cd,
    0x6c1e492ac440b0f6, 0x6c3494d2c28c45d0, 0x6c4bf912c335512c, 0x6c6302742f81b217,
    0x6c79d63250176ff6, 0x6c918ed00417fd64, 0x6ca7dd156a715f16, 0x6cc0378d827becbd,
    0x6cd60a8b9437fb07, 0x6cedf5039af1b491, 0x6d045ba2a9f7e439, 0x6d1bab58cf1dfbe2,
    0x6d32cda21fcd896d, 0x6d498e67ed111611, 0x6d615e069b7580ca, 0x6d779ac68ca512b5,
    0x6d900a7de459292b, 0x6da5cd4d0c89278c, 0x6dbda1c6460d161e, 0x6dd4231178c235d2,
    0x6deb5e76d405a221, 0x6e029962d4de103d, 0x6e19476504ba852e, 0x6e312dc4c23c62a5,
    0x6e47592fedac601f, 0x6e5fbbd6f6c9ebdb, 0x6e7590b8b1a4cef4, 0x6e8d4f703bd90d4d,
    0x6ea3eb1d75626c30, 0x6ebb126a79d0c0ea, 0x6ed265b4b6e28ea1, 0x6ee901276ccc73a1,
    0x6f00fe08ffc0ca7a, 0x6f17184f8d943f98, 0x6f2f63a9d76ef559, 0x6f4554ccaab0a066,
    0x6f5cfdfef9a92a43, 0x6f73b3c4eb1a94f3, 0x6f8ac7316ee74ed5, 0x6fa2329632777761,
    0x6fb8bbad0103b9d8, 0x6fd0ced1df6d80dd, 0x6fe6d82371f82d97, 0x6fff0c71ba5f2499,
    0x7015198723f42cbe, 0x702cad7003cabd3e, 0x70437d0629ea48c6, 0x705a7cc96822a2c7,
    0x70720005b89a1b4e, 0x708876f3a3109aee, 0x70a0a01df0b89337, 0x70b698a9a5f2ba1d,
    0x70ceb62bf6d099a4, 0x70e4dee64ecaa3c2, 0x70fc5dc0e57174a2, 0x711346df86817f67,
    0x712a333020bb8cf2, 0x7141ce01be9c7ec8, 0x715832f93a863ba1, 0x717071ebc718172c,
    0x718659e03a0e42fe, 0x719e60d5eb5d1ce2, 0x71b4a4e86194b8fd, 0x71cc0eef30a430e4,
    0x71e3114f5a338843, 0x71f9ea635a38a191, 0x72119c88be195115, 0x7227efbbb4ca4749,
    0x72404439f9f70d32, 0x72561bc54435d88c, 0x726e0c6cfded96e2, 0x72846b8b97aaafc3,
    0x729bc0f87e2a0dc0, 0x72b2dc5402ea2744, 0x72c9a260dc5cb4dd, 0x72e16b9934e80525,
    0x72f7ad390504c236, 0x7310170724aa620b, 0x7325de56dfa64c4a, 0x733db8ee9ba5c134,
    0x735432ce314e8e01, 0x736b73da6d77a018, 0x7382a7ebe318d57a, 0x73995b26751587ac,
    0x73b13b31a5110b69, 0x73c76b6f24100909, 0x73dfd4a3cccc1d98, 0x73f5a1932cdf6917,
    0x740d665838d00fab, 0x7423faae739e7564, 0x743b2792a49c67fc, 0x7452741561b0251f,
    0x746914b1f86aa42e, 0x74810b5094c22c64, 0x74972a5c1068fc7e, 0x74af7c31c464ae3d,
    0x74c5657851955475, 0x74dd14a750c9d177, 0x74f3c32aa887226f, 0x750adc1ed0307635,
    0x752240ceea1148ae, 0x7538cf01406c6a50, 0x7550dbf48e430396, 0x7566e9fdce1f593a,
    0x757f24b57dc24ac4, 0x75952a0478a2186a, 0x75acc3d965ef8971, 0x75c38c411eb69117,
    0x75da917ca34244dc, 0x75f20e16ec01bca6, 0x76088a122d234b39, 0x7620ad1c1fe99a69,
    0x7636aa5266c63b13, 0x764ece2c4e0708bd, 0x7664ef35d1f7558f, 0x767c73ec01897d05,
    0x769355f0298ec67c, 0x76aa47a9d744c255, 0x76c1dbebdb9f1388, 0x76d845e2a47f335b,
    0x76f07ec5dc0f22cc, 0x77066b57e964cb61, 0x771e789391be6c6f, 0x7734b50a92901ce5,
    0x774c24dcb3b87927, 0x776320362118bf56, 0x7779fea42bfd8e3d, 0x7791aa4c3152e3c8,
    0x77a8027092472297, 0x77c050f05904d117, 0x77d62d0c6a6719e7, 0x77ee23e8acc8d097,
    0x78047b80f462f0f4, 0x781bd6a91362ccad, 0x7832eb1161f782b7, 0x7849b669677367a7,
    0x7861793669c6d744, 0x7877bfb9e808f200, 0x7890239a3108d4f3, 0x78a5ef6e038f1fc9,
    0x78bdd0290a47075c, 0x78d442973653edcd, 0x78eb894ebe21778c, 0x7902b6804d5b58b3,
    0x79196ef755dccc33, 0x793148a905d8dbea, 0x79477dbc9d0946af, 0x795fed840476e1be,
    0x7975b27ad3e5ec3a, 0x798d7d521c8633e3, 0x79a40a4b9c27178a, 0x79bb3ccb582d8e5d,
    0x79d2828148f52492, 0x79e9284bc98ec768, 0x7a0118a28a8f752b, 0x7a173c76ae33b12e,
    0x7a2f94ccdd28600f, 0x7a457630ffacfa49, 0x7a5d2b615cebdbe2, 0x7a73d29c6e72ced5,
    0x7a8af11c8c4dd193, 0x7aa24f12bee9e227, 0x7ab8e2649aebf1da, 0x7ad0e921810e2de5,
    0x7ae6fbe61e0af908, 0x7aff3d0c37ae7434, 0x7b153a8eb04faf7c, 0x7b2cda544be2308c,
    0x7b439b87fa926b13, 0x7b5aa6400bc477dc, 0x7b721c331dc645e8, 0x7b889d3fa8539f82,
    0x7ba0ba24768a2a6f, 0x7bb6bc08f49993f9, 0x7bcee63f67158979, 0x7be4ff92145502b2,
    0x7bfc8a2870c48e4e, 0x7c13650c9298f9ca, 0x7c2a5c338e3d2b1e, 0x7c41e9e0d8727f6b,
    0x7c5858dad6113ce5, 0x7c708ba9fc3eda5b, 0x7c867cdd3f624846, 0x7c9e9063c5d944be,
    0x7cb4c5395f514ae2, 0x7ccc3adb59cc32b6, 0x7ce32f288d4422da, 0x7cfa12f4d1bb3776,
    0x7d11b81a66261de4, 0x7d2815340e4bda5e, 0x7d405db0a762c9ac, 0x7d563e611150f9cc,
    0x7d6e3b76b5cfdc19, 0x7d848b82c9d83550, 0x7d9bec6a9bfd27f8, 0x7db2f9da45ef311f,
    0x7dc9ca819a87ebc5, 0x7de186de425c1646, 0x7df7d24940f5e537, 0x7e103037111c911b,
    0x7e26009282aba144, 0x7e3de775a015a7e4, 0x7e54526c916ee2bf, 0x7e6b9ed3d3136570,
    0x7e82c5201c863f21, 0x7e9982d7b3212b2c, 0x7eb1562aecc6eab2, 0x7ec7901863bd0dec,
    0x7ee0033bd677e517, 0x7ef5c36fb1036d55, 0x7f0d945df4f8ec8e, 0x7f2419f4f87e2b37,
    0x7f3b5214a170249d, 0x7f5290f875798760, 0x7f693bf4ec282efb, 0x7f8125fee944f2c3,
    0x7f974e9f71fa5b35, 0x7fafad7b30b5865e, 0x7fc586f6bf260cf1, 0x7fdd422d2be5dc9b,
    0x7ff0000000000000,
];

/// `e^(j / 256)` for `j` in `[-256, 256]`, at offset `j + 256`.
pub static EXP_FRAC: [u64; 513] = [
    0x3fd78b56362cef38, 0x3fd7a2ed55fbc0f2, 0x3fd7ba9c18b9e0e6, 0x3fd7d262961613cc,
    0x3fd7ea40e5d6d8fa, 0x3fd802371fda8230, 0x3fd81a455c174b70, 0x3fd8326bb29b72f7,
    0x3fd84aaa3b8d514e, 0x3fd863010f2b716b, 0x3fd87b7045cca8f3, 0x3fd893f7f7e03092,
    0x3fd8ac983dedbc65, 0x3fd8c55130959488, 0x3fd8de22e890adb3, 0x3fd8f70d7eb0c1f1,
    0x3fd910110be06976, 0x3fd9292da9233388, 0x3fd942636f95bf81, 0x3fd95bb2786dd5ed,
    0x3fd9751adcfa81c1, 0x3fd98e9cb6a429a7, 0x3fd9a8381eeca969, 0x3fd9c1ed2f6f6b72,
    0x3fd9dbbc01e18268, 0x3fd9f5a4b011c2e5, 0x3fda0fa753e8dd42, 0x3fda29c407697780,
    0x3fda43fae4b0474e, 0x3fda5e4c05f42c21, 0x3fda78b78586496e, 0x3fda933d7dd220fc,
    0x3fdaadde095dad4b, 0x3fdac89942c97c20, 0x3fdae36f44d0c921, 0x3fdafe602a499892,
    0x3fdb196c0e24d229, 0x3fdb34930b6e5c04, 0x3fdb4fd53d4d35ae, 0x3fdb6b32bf03934d,
    0x3fdb86ababeef8df, 0x3fdba2401f885599, 0x3fdbbdf035641f60, 0x3fdbd9bc09326e5f,
    0x3fdbf5a3b6bf18b7, 0x3fdc11a759f1ce45, 0x3fdc2dc70ece3493, 0x3fdc4a02f17402d6,
    0x3fdc665b1e1f1e0d, 0x3fdc82cfb127b540, 0x3fdc9f60c7025dd7, 0x3fdcbc0e7c40300e,
    0x3fdcd8d8ed8ee386, 0x3fdcf5c037b8ebf4, 0x3fdd12c477a595ec, 0x3fdd2fe5ca5923c4,
    0x3fdd4d244cf4ea9e, 0x3fdd6a801cb76f85, 0x3fdd87f956fc84af, 0x3fdda590193d66d4,
    0x3fddc3448110daae, 0x3fdde116ac2b4a89, 0x3fddff06b85ee3fc, 0x3fde1d14c39bb5b9,
    0x3fde3b40ebefcd7e, 0x3fde598b4f875624, 0x3fde77f40cacb5c7, 0x3fde967b41c8ac15,
    0x3fdeb5210d6270b7, 0x3fded3e58e1fd1d4, 0x3fdef2c8e2c552b8, 0x3fdf11cb2a364a9e,
    0x3fdf30ec8375038b, 0x3fdf502d0da2d956, 0x3fdf6f8ce80058c8, 0x3fdf8f0c31ed5edb,
    0x3fdfaeab0ae9381d, 0x3fdfce699292c02b, 0x3fdfee47e8a88156, 0x3fe0072316846a2d,
    0x3fe017323fd90020, 0x3fe0275180612d31, 0x3fe03780e83c3340, 0x3fe047c087997b80,
    0x3fe058106eb8a6aa, 0x3fe06870ade99d38, 0x3fe078e1558c9fb9, 0x3fe089627612572f,
    0x3fe099f41ffbe580, 0x3fe0aa9663daf5f7, 0x3fe0bb495251cdd5, 0x3fe0cc0cfc135cf5,
    0x3fe0dce171e34e7f, 0x3fe0edc6c49619ab, 0x3fe0febd05111292, 0x3fe10fc4444a7b1a,
    0x3fe120dc934993e8, 0x3fe132060326ad67, 0x3fe14340a50b38e2, 0x3fe1548c8a31d9ae,
    0x3fe165e9c3e67663, 0x3fe1775863864a27, 0x3fe188d87a7ff60e, 0x3fe19a6a1a539286,
    0x3fe1ac0d5492c0dc, 0x3fe1bdc23ae0bcc5, 0x3fe1cf88def26e0a, 0x3fe1e161528e7a38,
    0x3fe1f34ba78d5666, 0x3fe20547efd95913, 0x3fe217563d6ecc0b, 0x3fe22976a25bfe63,
    0x3fe23ba930c1568b, 0x3fe24dedfad1646e, 0x3fe2604512d0f3a0, 0x3fe272ae8b171daa,
    0x3fe2852a760d5c59, 0x3fe297b8e62f9c2e, 0x3fe2aa59ee0c4ed8, 0x3fe2bd0da0447dc0,
    0x3fe2cfd40f8bdcae, 0x3fe2e2ad4ea8dc79, 0x3fe2f5997074bdd2, 0x3fe3089887dba416,
    0x3fe31baaa7dca843, 0x3fe32ecfe389ebf0, 0x3fe342084e08ac63, 0x3fe35553fa9155b5,
    0x3fe368b2fc6f960a, 0x3fe37c25670270dd, 0x3fe38fab4dbc5261, 0x3fe3a344c42322f0,
    0x3fe3b6f1ddd05a92, 0x3fe3cab2ae711498, 0x3fe3de8749c62349, 0x3fe3f26fc3a423a1,
    0x3fe4066c2ff39127, 0x3fe41a7ca2b0d9d4, 0x3fe42ea12fec7211, 0x3fe442d9ebcae8c9,
    0x3fe45726ea84fb88, 0x3fe46b884067aaba, 0x3fe47ffe01d44df5, 0x3fe494884340a859,
    0x3fe4a9271936fd09, 0x3fe4bdda985623b3, 0x3fe4d2a2d5519d31, 0x3fe4e77fe4f1a838,
    0x3fe4fc71dc135627, 0x3fe51178cfa89fdd, 0x3fe52694d4b87ab0, 0x3fe53bc6005eed73,
    0x3fe5510c67cd2591, 0x3fe5666820498c3c, 0x3fe57bd93f2fdbba, 0x3fe5915fd9f134ba,
    0x3fe5a6fc061433c8, 0x3fe5bcadd93506d5, 0x3fe5d275690582d0, 0x3fe5e852cb4d395b,
    0x3fe5fe4615e98e8f, 0x3fe6144f5ecdcedd, 0x3fe62a6ebc034500, 0x3fe640a443a95004,
    0x3fe656f00bf5796a, 0x3fe66d522b338b5a, 0x3fe683cab7c5a6ef, 0x3fe69a59c8245a9b,
    0x3fe6b0ff72deb89d, 0x3fe6c7bbce9a6d93, 0x3fe6de8ef213d71e, 0x3fe6f578f41e1a9e,
    0x3fe70c79eba33c07, 0x3fe72391efa434c7, 0x3fe73ac117390acd, 0x3fe752077990e79d,
    0x3fe769652df22f7e, 0x3fe780da4bba98c5, 0x3fe79866ea5f432d, 0x3fe7b00b216ccf53,
    0x3fe7c7c70887763c, 0x3fe7df9ab76b20fd, 0x3fe7f78645eb8076, 0x3fe80f89cbf42526,
    0x3fe827a561889716, 0x3fe83fd91ec46ddc, 0x3fe858251bdb68b9, 0x3fe87089711986c9,
    0x3fe8890636e31f54, 0x3fe8a19b85b4fa2e, 0x3fe8ba4976246834, 0x3fe8d31020df5be4,
    0x3fe8ebef9eac820b, 0x3fe904e8086b5a88, 0x3fe91df97714512e, 0x3fe9372403b8d6bd,
    0x3fe95067c78379f2, 0x3fe969c4dbb800b4, 0x3fe9833b59b38154, 0x3fe99ccb5aec7bed,
    0x3fe9b674f8f2f3d8, 0x3fe9d0384d708940, 0x3fe9ea15722892c7, 0x3fea040c80f8374f,
    0x3fea1e1d93d687d0, 0x3fea3848c4d49955, 0x3fea528e2e1d9f0a, 0x3fea6cede9f70468,
    0x3fea876812c0877c, 0x3feaa1fcc2f45344, 0x3feabcac15271a2a, 0x3fead7762408309c,
    0x3feaf25b0a61a7b5, 0x3feb0d5ae318680c, 0x3feb2875c92c4c99, 0x3feb43abd7b83db2,
    0x3feb5efd29f24c26, 0x3feb7a69db2bcc77, 0x3feb95f206d17228, 0x3febb195c86b6b29,
    0x3febcd553b9d7b62, 0x3febe9307c271855, 0x3fec0527a5e384de, 0x3fec213ad4c9ed0e,
    0x3fec3d6a24ed8222, 0x3fec59b5b27d9697, 0x3fec761d99c5ba58, 0x3fec92a1f72dd70d,
    0x3fecaf42e73a4c7e, 0x3feccc00868c0d18, 0x3fece8daf1e0ba95, 0x3fed05d24612c2af,
    0x3fed22e6a0197c03, 0x3fed40181d094303, 0x3fed5d66da13970f, 0x3fed7ad2f48737a2,
    0x3fed985c89d041a3, 0x3fedb603b7784cd2, 0x3fedd3c89b26894e, 0x3fedf1ab529fdd42,
    0x3fee0fabfbc702a4, 0x3fee2dcab49ca51b, 0x3fee4c079b3f8000, 0x3fee6a62cdec7c7b,
    0x3fee88dc6afecfc0, 0x3feea77490f0196b, 0x3feec62b5e5881fb, 0x3feee500f1eed967,
    0x3fef03f56a88b5d8, 0x3fef2308e71a927b, 0x3fef423b86b7ee79, 0x3fef618d68936c0a,
    0x3fef80feabfeefa5, 0x3fefa08f706bbf54, 0x3fefc03fd56aa225, 0x3fefe00ffaabffbc,
    0x3ff0000000000000, 0x3ff0100802ab5577, 0x3ff0202015600446, 0x3ff0304848362077,
    0x3ff04080ab55de39, 0x3ff050c94ef7a207, 0x3ff06122436410dd, 0x3ff0718b98f42085,
    0x3ff08205601127ed, 0x3ff0928fa934ef91, 0x3ff0a32a84e9c1f6, 0x3ff0b3d603ca7c32,
    0x3ff0c49236829e8c, 0x3ff0d55f2dce5d1f, 0x3ff0e63cfa7ab09d, 0x3ff0f72bad65671b,
    0x3ff1082b577d34ed, 0x3ff1193c09c1c596, 0x3ff12a5dd543ccc5, 0x3ff13b90cb25176a,
    0x3ff14cd4fc989cd6, 0x3ff15e2a7ae28fed, 0x3ff16f9157587069, 0x3ff18109a3611c35,
    0x3ff192937074e0cd, 0x3ff1a42ed01d8cbc, 0x3ff1b5dbd3f68122, 0x3ff1c79a8dacc351,
    0x3ff1d96b0eff0e79, 0x3ff1eb4d69bde56a, 0x3ff1fd41afcba45e, 0x3ff20f47f31c92e4,
    0x3ff2216045b6f5cd, 0x3ff2338ab9b32135, 0x3ff245c7613b8a9b, 0x3ff258164e8cdb0e,
    0x3ff26a7793f60164, 0x3ff27ceb43d84490, 0x3ff28f7170a755fd, 0x3ff2a20a2ce96406,
    0x3ff2b4b58b372c79, 0x3ff2c7739e3c0f33, 0x3ff2da4478b620c7, 0x3ff2ed282d763d42,
    0x3ff3001ecf601af7, 0x3ff31328716a5d64, 0x3ff32645269ea829, 0x3ff339750219b213,
    0x3ff34cb8170b5835, 0x3ff3600e78b6b11d, 0x3ff373783a722012, 0x3ff386f56fa7686e,
    0x3ff39a862bd3c106, 0x3ff3ae2a8287e7a8, 0x3ff3c1e2876834aa, 0x3ff3d5ae4e2cae93,
    0x3ff3e98deaa11dcc, 0x3ff3fd8170a52072, 0x3ff41188f42c3e32, 0x3ff425a4893dfc40,
    0x3ff439d443f5f159, 0x3ff44e183883d9e5, 0x3ff462707b2bac21, 0x3ff476dd2045ac68,
    0x3ff48b5e3c3e8186, 0x3ff49ff3e397492c, 0x3ff4b49e2ae5ac67, 0x3ff4c95d26d3f440,
    0x3ff4de30ec211e60, 0x3ff4f3198fa0f1d0, 0x3ff50817263c13cd, 0x3ff51d29c4f01cb3,
    0x3ff5325180cfacf7, 0x3ff5478e6f02823d, 0x3ff55ce0a4c58c7c, 0x3ff57248376b033d,
    0x3ff587c53c5a7af0, 0x3ff59d57c910fa4e, 0x3ff5b2fff3210fd9, 0x3ff5c8bdd032e771,
    0x3ff5de9176045ff5, 0x3ff5f47afa69210a, 0x3ff60a7a734ab0e8, 0x3ff6208ff6a88a46,
    0x3ff636bb9a983258, 0x3ff64cfd75454ee8, 0x3ff663559cf1bc7c, 0x3ff679c427f5a49f,
    0x3ff690492cbf9433, 0x3ff6a6e4c1d491e1, 0x3ff6bd96fdd034a2, 0x3ff6d45ff764ba56,
    0x3ff6eb3fc55b1e76, 0x3ff702367e9330e1, 0x3ff719443a03acb9, 0x3ff730690eba4f5b,
    0x3ff747a513dbef6a, 0x3ff75ef860a493f9, 0x3ff776630c678bc1, 0x3ff78de52e8f8479,
    0x3ff7a57ede9ea23e, 0x3ff7bd30342e9717, 0x3ff7d4f946f0ba8d, 0x3ff7ecda2eae215f,
    0x3ff804d30347b546, 0x3ff81ce3dcb64cdc, 0x3ff8350cd30ac390, 0x3ff84d4dfe6e11bb,
    0x3ff865a7772164c5, 0x3ff87e19557e376a, 0x3ff896a3b1f66a0e, 0x3ff8af46a5145b37,
    0x3ff8c802477b0010, 0x3ff8e0d6b1e5fd0e, 0x3ff8f9c3fd29beaf, 0x3ff912ca4233924b,
    0x3ff92be99a09bf00, 0x3ff945221dcb9ebd, 0x3ff95e73e6b1b75e, 0x3ff977df0e0dd3e5,
    0x3ff99163ad4b1dcc, 0x3ff9ab01ddee3672, 0x3ff9c4b9b995509b, 0x3ff9de8b59f84a14,
    0x3ff9f876d8e8c566, 0x3ffa127c505243ab, 0x3ffa2c9bda3a3e78, 0x3ffa46d590c041e1,
    0x3ffa61298e1e069c, 0x3ffa7b97eca78c38, 0x3ffa9620c6cb3374, 0x3ffab0c43711d8a8,
    0x3ffacb82581eee54, 0x3ffae65b44b097bf, 0x3ffb014f179fc3b8, 0x3ffb1c5debe0476d,
    0x3ffb3787dc80f95f, 0x3ffb52cd04abcc72, 0x3ffb6e2d7fa5eb18, 0x3ffb89a968cfd293,
    0x3ffba540dba56e56, 0x3ffbc0f3f3be3384, 0x3ffbdcc2cccd3c85, 0x3ffbf8ad82a164b8,
    0x3ffc14b431256446, 0x3ffc30d6f45fec09, 0x3ffc4d15e873c193, 0x3ffc6971299fdb52,
    0x3ffc85e8d43f7cd0, 0x3ffca27d04ca530c, 0x3ffcbf2dd7d490f2, 0x3ffcdbfb6a0f0bf1,
    0x3ffcf8e5d84758a9, 0x3ffd15ed3f67e7bb, 0x3ffd3311bc7822b4, 0x3ffd50536c9c8911,
    0x3ffd6db26d16cd67, 0x3ffd8b2edb45f2a3, 0x3ffda8c8d4a66969, 0x3ffdc68076d22d91,
    0x3ffde455df80e3c0, 0x3ffe02492c87f723, 0x3ffe205a7bdab73e, 0x3ffe3e89eb8a75e6,
    0x3ffe5cd799c6a54e, 0x3ffe7b43a4dcf63a, 0x3ffe99ce2b397649, 0x3ffeb8774b66ae62,
    0x3ffed73f240dc142, 0x3ffef625d3f68a1f, 0x3fff152b7a07bb76, 0x3fff34503546fdee,
    0x3fff539424d90f5e, 0x3fff72f76801e1f4, 0x3fff927a1e24bb76, 0x3fffb21c66c454a6,
    0x3fffd1de6182f8c9, 0x3ffff1c02e22a540, 0x400008e0f64294ab, 0x400018f1de56230b,
    0x40002912df5ce72a, 0x400039440977e368, 0x400049856cd84339, 0x400059d719bf6b59,
    0x40006a39207f0a09, 0x40007aab91792768, 0x40008b2e7d2035cf, 0x40009bc1f3f72244,
    0x4000ac6606916501, 0x4000bd1ac5931202, 0x4000cde041b0e9ae, 0x4000deb68bb06988,
    0x4000ef9db467dcf8, 0x40010095ccbe6e1c, 0x4001119ee5ac36b6, 0x400122b9103a511f,
    0x400133e45d82e952, 0x40014520deb14e05, 0x4001566ea50201d7, 0x400167cdc1c2cc89,
    0x4001793e4652cc50, 0x40018ac04422872f, 0x40019c53ccb3fc6b, 0x4001adf8f19ab60c,
    0x4001bfafc47bda73, 0x4001d178570e3df9, 0x4001e352bb1a74ad, 0x4001f53f027ae418,
    0x4002073d3f1bd518, 0x4002194d82fb85cf, 0x40022b6fe02a3b9c, 0x40023da468ca5533,
    0x40024feb2f105cb8, 0x40026244454319f5, 0x400274afbdbba4a6, 0x4002872daae576cd,
    0x400299be1f3e7f1c, 0x4002ac612d57337a, 0x4002bf16e7d2a38c, 0x4002d1df61668b5e,
    0x4002e4baacdb6614, 0x4002f7a8dd0c80b5, 0x40030aaa04e80d05, 0x40031dbe376f3477,
    0x400330e587b62b28, 0x4003442008e442f7, 0x4003576dce33fead, 0x40036aceeaf32536,
    0x40037e437282d4ee, 0x400391cb78579704, 0x4003a5670ff972ed, 0x4003b9164d0401ee,
    0x4003ccd9432682b4, 0x4003e0b00623ed09, 0x4003f49aa9d30590, 0x40040899421e71a2,
    0x40041cabe304cb34, 0x400430d2a098b4da, 0x4004450d8f00edd4, 0x4004595cc278663b,
    0x40046dc04f4e5338, 0x4004823849e64353, 0x400496c4c6b832da, 0x4004ab65da50a053,
    0x4004c01b9950a111, 0x4004d4e6186df5cc, 0x4004e9c56c731f5d, 0x4004feb9aa3f7388,
    0x400513c2e6c731d7, 0x400528e137139892, 0x40053e14b042f9ca, 0x4005535d6788d071,
    0x400568bb722dd593, 0x40057e2ee590159d, 0x400593b7d72305bb, 0x4005a9565c6f994c,
    0x4005bf0a8b145769,
];
