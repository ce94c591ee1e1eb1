mod mask_tests;
