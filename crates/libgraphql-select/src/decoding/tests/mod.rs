mod scalar_decoder_tests;
